//! Exportación del reporte tabular.
//!
//! El formato se elige por extensión: `.csv`, `.tsv` o `.json`; cualquier
//! otra cosa se escribe como CSV. Los valores reales se renderizan con dos
//! decimales, los conteos y el rango como enteros.
pub mod export;

pub use export::{export, report_rows, ReportFormat, ReportRow, COLUMNS};
