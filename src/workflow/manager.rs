//! Orquestador del pipeline de drug-likeness.
//! Se encarga de:
//! - Resolver cada nombre a un identificador canónico (uno por nombre).
//! - Unir con el catálogo de referencia, descartando las omisiones.
//! - Calcular descriptores, reglas y puntuación por registro.
//! - Rankear el lote completo (única barrera de sincronización) y exportar.
//!
//! El resolvedor, el catálogo y el toolkit se cargan una vez al construir el
//! pipeline y son de solo lectura: varias ejecuciones pueden compartirlos.
use std::path::Path;

use chem_domain::{Query, ScoredRecord};
use log::info;
use serde::Serialize;

use crate::data::Catalog;
use crate::errors::PipelineError;
use crate::hashing::ranking_fingerprint;
use crate::providers::resolver::trait_resolver::NameResolver;
use crate::providers::toolkit::trait_toolkit::StructureToolkit;
use crate::report;
use crate::workflow::{compute_all, join, rank, DescriptorErrorPolicy};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub on_descriptor_error: DescriptorErrorPolicy,
    pub parallel: bool,
}

/// Conteos por etapa. El filtrado es monótono:
/// `joined <= resolved <= queries` y `scored + skipped == joined`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageCounts {
    pub queries: usize,
    pub resolved: usize,
    pub joined: usize,
    pub scored: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub records: Vec<ScoredRecord>,
    pub counts: StageCounts,
    pub fingerprint: String,
}

pub struct DrugPropertyPipeline<R, T> {
    resolver: R,
    catalog: Catalog,
    toolkit: T,
    options: PipelineOptions,
}

impl<R, T> DrugPropertyPipeline<R, T>
    where R: NameResolver,
          T: StructureToolkit
{
    pub fn new(resolver: R, catalog: Catalog, toolkit: T, options: PipelineOptions) -> Self {
        Self { resolver,
               catalog,
               toolkit,
               options }
    }

    /// Ejecuta resolución, unión, cálculo y ranking sobre una lista de nombres.
    pub fn run<S: AsRef<str>>(&self, names: &[S]) -> Result<PipelineReport, PipelineError> {
        let queries: Vec<Query> = names.iter().map(|n| Query::new(n.as_ref())).collect();
        let results = self.resolver.resolve_all(&queries);
        let resolved = results.iter().filter(|r| r.is_matched()).count();
        info!("resolución ({}): {}/{} nombres con identificador", self.resolver.get_name(), resolved, queries.len());

        let joined = join(&results, &self.catalog);
        let joined_len = joined.len();
        info!("unión con catálogo: {} registros", joined_len);

        let outcome = compute_all(joined, &self.toolkit, self.options.on_descriptor_error, self.options.parallel)?;
        info!("descriptores ({}): {} calculados, {} omitidos",
              self.toolkit.get_name(),
              outcome.records.len(),
              outcome.skipped.len());

        let records = rank(outcome.records);
        let fingerprint = ranking_fingerprint(&records);
        info!("ranking completo, huella {}", fingerprint);

        Ok(PipelineReport { counts: StageCounts { queries: queries.len(),
                                                  resolved,
                                                  joined: joined_len,
                                                  scored: records.len(),
                                                  skipped: outcome.skipped.len() },
                            records,
                            fingerprint })
    }

    /// Ejecuta el pipeline y guarda el reporte en `destination`.
    pub fn generate_drug_info<S: AsRef<str>>(&self, names: &[S], destination: &Path) -> Result<String, PipelineError> {
        let ranked = self.run(names)?;
        report::export(&ranked.records, destination)?;
        Ok(format!("Finished successfully - extracted properties are saved in the file '{}'.",
                   destination.display()))
    }
}
