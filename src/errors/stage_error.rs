use std::path::PathBuf;

use chem_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no se pudo leer {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("formato inválido en {path}: {source}")]
    Parse { path: PathBuf, source: csv::Error },
}

/// Fallo del toolkit químico al parsear o calcular.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ToolkitError {
    #[error("parseo fallido: {0}")]
    Parse(String),
    #[error("descriptor fallido: {0}")]
    Descriptor(String),
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Fallo al calcular descriptores de un registro concreto.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("registro {canonical_id}: {reason}")]
pub struct DescriptorError {
    pub canonical_id: String,
    pub reason: String,
}

impl DescriptorError {
    pub fn for_record(canonical_id: &str, err: ToolkitError) -> Self {
        DescriptorError { canonical_id: canonical_id.to_string(),
                          reason: err.to_string() }
    }
}

#[derive(Debug, Error)]
pub enum ExportCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("formato de reporte no soportado: '{0}' (use .csv, .tsv, .json o .xlsx)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Error)]
#[error("no se pudo escribir el reporte en {path}: {source}")]
pub struct ExportError {
    pub path: PathBuf,
    pub source: ExportCause,
}
