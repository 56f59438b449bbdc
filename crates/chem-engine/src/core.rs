use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use std::ffi::CString;
use std::sync::OnceLock;

static RDKIT_MODULE: OnceLock<Py<PyModule>> = OnceLock::new();
pub fn init_python() -> PyResult<()> {
    Python::attach(|py| {
        if RDKIT_MODULE.get().is_some() {
            return Ok(());
        }
        let code = CString::new(include_str!("../python/rdkit_wrapper.py"))?;
        let module = PyModule::from_code(py, code.as_c_str(), c_str!("rdkit_wrapper.py"), c_str!("rdkit_wrapper"))?;
        // Guardamos el módulo en el OnceLock como Py<PyModule>
        RDKIT_MODULE.set(module.unbind()).ok();
        Ok(())
    })
}

fn get_module(py: Python<'_>) -> PyResult<Py<PyModule>> {
    RDKIT_MODULE.get().map(|module| module.clone_ref(py)).ok_or_else(|| {
                                                             PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "init_python() debe llamarse antes de usar el módulo RDKit"
        )
                                                         })
}

/// Molécula RDKit ya parseada. Se parsea una vez y se reutiliza para todos
/// los descriptores.
pub struct MoleculeHandle {
    mol: Py<PyAny>,
}

pub fn parse_molecule(smiles: &str) -> PyResult<MoleculeHandle> {
    Python::attach(|py| {
        let rdkit_py = get_module(py)?;
        let rdkit = rdkit_py.bind(py);
        let mol = rdkit.getattr("parse")?.call1((smiles,))?;
        Ok(MoleculeHandle { mol: mol.unbind() })
    })
}

pub fn descriptor(handle: &MoleculeHandle, name: &str) -> PyResult<f64> {
    Python::attach(|py| {
        let rdkit_py = get_module(py)?;
        let rdkit = rdkit_py.bind(py);
        let value: f64 = rdkit.getattr("descriptor")?.call1((handle.mol.bind(py), name))?.extract()?;
        Ok(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "requiere Python con RDKit instalado"]
    fn test_parse_and_descriptors() {
        init_python().expect("Fallo al inicializar Python/RDKit");
        let mol = parse_molecule("CCO").expect("Fallo al parsear etanol");
        let mw = descriptor(&mol, "CalcMolWt").unwrap();
        assert!((mw - 46.07).abs() < 0.1);
        assert_eq!(descriptor(&mol, "CalcNumHeavyAtoms").unwrap(), 3.0);
        assert_eq!(descriptor(&mol, "CalcNumHBD").unwrap(), 1.0);
    }

    #[test]
    #[ignore = "requiere Python con RDKit instalado"]
    fn test_parse_rejects_invalid_smiles() {
        init_python().expect("Fallo al inicializar Python/RDKit");
        assert!(parse_molecule("C1CC(").is_err());
        assert!(parse_molecule("").is_err());
    }
}
