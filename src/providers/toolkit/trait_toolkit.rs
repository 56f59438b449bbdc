//! Contrato del toolkit quimioinformático: parsear una estructura una vez y
//! calcular descriptores sobre el handle resultante.
use chem_domain::{DescriptorKind, DescriptorSet};

use crate::errors::ToolkitError;

pub trait StructureToolkit: Send + Sync {
    type Handle;

    fn get_name(&self) -> &str;

    fn parse(&self, structure: &str) -> Result<Self::Handle, ToolkitError>;

    fn descriptor(&self, handle: &Self::Handle, kind: DescriptorKind) -> Result<f64, ToolkitError>;

    /// Parsea una vez y calcula los nueve descriptores.
    fn descriptor_set(&self, structure: &str) -> Result<DescriptorSet, ToolkitError> {
        let handle = self.parse(structure)?;
        DescriptorSet::from_values(|kind| self.descriptor(&handle, kind))
    }
}
