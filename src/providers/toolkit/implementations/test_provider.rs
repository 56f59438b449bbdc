use std::collections::HashMap;

use chem_domain::{DescriptorKind, DescriptorSet};

use crate::errors::ToolkitError;
use crate::providers::toolkit::trait_toolkit::StructureToolkit;

/// Toolkit determinista para tests: cada estructura registrada devuelve un
/// `DescriptorSet` fijo. Estructuras vacías o desconocidas no parsean.
#[derive(Debug, Clone, Default)]
pub struct FixedToolkit {
    table: HashMap<String, DescriptorSet>,
}

impl FixedToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, structure: &str, descriptors: DescriptorSet) -> Self {
        self.table.insert(structure.to_string(), descriptors);
        self
    }
}

impl StructureToolkit for FixedToolkit {
    type Handle = DescriptorSet;

    fn get_name(&self) -> &str {
        "fixed_toolkit"
    }

    fn parse(&self, structure: &str) -> Result<DescriptorSet, ToolkitError> {
        if structure.trim().is_empty() {
            return Err(ToolkitError::Parse("estructura vacía".into()));
        }
        self.table
            .get(structure)
            .cloned()
            .ok_or_else(|| ToolkitError::Parse(format!("estructura no reconocida: {structure}")))
    }

    fn descriptor(&self, handle: &DescriptorSet, kind: DescriptorKind) -> Result<f64, ToolkitError> {
        Ok(handle.get(kind))
    }
}
