use pyo3::PyErr;
use thiserror::Error;
pub mod core;
pub use core::MoleculeHandle;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error inicializando Python/RDKit: {0}")]
    Init(PyErr),
    #[error("Error parseando SMILES '{smiles}': {source}")]
    Parse { smiles: String, source: PyErr },
    #[error("Error calculando descriptor {name}: {source}")]
    Descriptor { name: String, source: PyErr },
}

/// Nombres de las funciones de descriptor expuestas por el wrapper Python.
pub const DESCRIPTOR_FUNCTIONS: [&str; 9] = ["CalcNumHBA",
                                             "CalcNumHBD",
                                             "CalcTPSA",
                                             "CalcMolWt",
                                             "CalcNumAromaticRings",
                                             "CalcNumAtomStereoCenters",
                                             "CalcNumHeavyAtoms",
                                             "MolLogP",
                                             "MolMR"];

pub struct ChemEngine {
    _private: (),
}

impl ChemEngine {
    pub fn init() -> Result<Self, EngineError> {
        core::init_python().map_err(EngineError::Init)?;
        Ok(Self { _private: () })
    }
    pub fn parse(&self, smiles: &str) -> Result<MoleculeHandle, EngineError> {
        core::parse_molecule(smiles).map_err(|source| EngineError::Parse { smiles: smiles.to_string(),
                                                                            source })
    }
    pub fn descriptor(&self, handle: &MoleculeHandle, name: &str) -> Result<f64, EngineError> {
        core::descriptor(handle, name).map_err(|source| EngineError::Descriptor { name: name.to_string(),
                                                                                  source })
    }
}
