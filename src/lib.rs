//! DrugRank Rust Library
//!
//! Pipeline de normalización a ranking para listas de nombres de fármacos:
//! - `providers`: resolvedor de nombres y toolkit quimioinformático (traits).
//! - `data`: catálogo de referencia cargado una vez al arrancar.
//! - `workflow`: unión, cálculo de descriptores/reglas/puntuación y ranking.
//! - `report`: exportación tabular (CSV/TSV/JSON).
//! - `hashing`: huella canónica del lote rankeado.
//! - `config` y `errors`: configuración por entorno y errores por etapa.

pub mod config;
pub mod data;
pub mod errors;
pub mod hashing;
pub mod providers;
pub mod report;
pub mod workflow;

use config::AppConfig;
use data::{load_synonyms, Catalog};
use errors::PipelineError;
use providers::IndexResolver;

/// Carga el catálogo y ajusta el índice de resolución (nombres del catálogo
/// más sinónimos opcionales). Se hace una vez por proceso.
pub fn load_reference(cfg: &AppConfig) -> Result<(Catalog, IndexResolver), PipelineError> {
    let catalog = Catalog::from_path(&cfg.catalog_path, cfg.delimiter)?;
    let mut pairs = catalog.name_index();
    if let Some(path) = &cfg.synonyms_path {
        pairs.extend(load_synonyms(path, cfg.delimiter)?);
    }
    let resolver = IndexResolver::fit(pairs).with_fuzzy_threshold(cfg.fuzzy_threshold);
    Ok((catalog, resolver))
}
