//! Toolkit respaldado por RDKit (Python embebido, crate `chemengine`).
use chem_domain::DescriptorKind;
use chemengine::{ChemEngine, EngineError, MoleculeHandle};

use crate::errors::ToolkitError;
use crate::providers::toolkit::trait_toolkit::StructureToolkit;

pub struct RdkitToolkit {
    engine: ChemEngine,
}

impl RdkitToolkit {
    pub fn init() -> Result<Self, EngineError> {
        Ok(Self { engine: ChemEngine::init()? })
    }
}

/// Función del wrapper RDKit que calcula cada descriptor.
pub fn rdkit_function(kind: DescriptorKind) -> &'static str {
    match kind {
        DescriptorKind::Hba => "CalcNumHBA",
        DescriptorKind::Hbd => "CalcNumHBD",
        DescriptorKind::Tpsa => "CalcTPSA",
        DescriptorKind::AvgMolecularWeight => "CalcMolWt",
        DescriptorKind::AromaticRings => "CalcNumAromaticRings",
        DescriptorKind::ChiralCentres => "CalcNumAtomStereoCenters",
        DescriptorKind::HeavyAtoms => "CalcNumHeavyAtoms",
        DescriptorKind::LogP => "MolLogP",
        DescriptorKind::Refractivity => "MolMR",
    }
}

impl StructureToolkit for RdkitToolkit {
    type Handle = MoleculeHandle;

    fn get_name(&self) -> &str {
        "rdkit"
    }

    fn parse(&self, structure: &str) -> Result<MoleculeHandle, ToolkitError> {
        self.engine.parse(structure).map_err(|e| ToolkitError::Parse(e.to_string()))
    }

    fn descriptor(&self, handle: &MoleculeHandle, kind: DescriptorKind) -> Result<f64, ToolkitError> {
        self.engine
            .descriptor(handle, rdkit_function(kind))
            .map_err(|e| ToolkitError::Descriptor(e.to_string()))
    }
}
