use thiserror::Error;

use super::stage_error::{CatalogError, DescriptorError, ExportError};

#[derive(Debug, Error)]
#[error("Error de configuración: {0}")]
pub struct ConfigError(pub String);

/// Error de alto nivel: identifica la etapa que falló.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Etapa catálogo: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Etapa descriptores: {0}")]
    Descriptor(#[from] DescriptorError),
    #[error("Etapa exportación: {0}")]
    Export(#[from] ExportError),
    #[error("Toolkit químico no disponible: {0}")]
    Toolkit(String),
}
