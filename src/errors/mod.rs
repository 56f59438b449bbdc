//! Errores del pipeline, uno por etapa.
//!
//! Las omisiones de resolución (UNMATCHED o id ausente del catálogo) no son
//! errores: se filtran en la unión y nunca llegan aquí.
pub mod core_error;
pub mod stage_error;

pub use core_error::{ConfigError, PipelineError};
pub use stage_error::{CatalogError, DescriptorError, ExportCause, ExportError, ToolkitError};
