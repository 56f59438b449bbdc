//! Cálculo de descriptores, reglas y puntuación por registro.
//!
//! Cada registro es independiente; con `parallel` se evalúan con rayon y el
//! resultado conserva el orden de entrada.
use chem_domain::{EvaluatedRecord, JoinedRecord};
use log::warn;
use rayon::prelude::*;

use crate::errors::DescriptorError;
use crate::providers::toolkit::trait_toolkit::StructureToolkit;

/// Qué hacer cuando un registro no puede calcularse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptorErrorPolicy {
    /// El primer fallo (en orden de entrada) aborta el lote.
    #[default]
    Abort,
    /// El registro se descarta con un aviso.
    Skip,
}

impl std::str::FromStr for DescriptorErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!("política desconocida '{other}' (abort|skip)")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComputeOutcome {
    pub records: Vec<EvaluatedRecord>,
    pub skipped: Vec<DescriptorError>,
}

pub fn compute<T: StructureToolkit>(record: JoinedRecord, toolkit: &T) -> Result<EvaluatedRecord, DescriptorError> {
    let descriptors = toolkit.descriptor_set(&record.structure)
                             .map_err(|e| DescriptorError::for_record(&record.canonical_id, e))?;
    Ok(EvaluatedRecord::new(record, descriptors))
}

pub fn compute_all<T: StructureToolkit>(records: Vec<JoinedRecord>,
                                        toolkit: &T,
                                        policy: DescriptorErrorPolicy,
                                        parallel: bool)
                                        -> Result<ComputeOutcome, DescriptorError> {
    let results: Vec<Result<EvaluatedRecord, DescriptorError>> = if parallel {
        records.into_par_iter().map(|r| compute(r, toolkit)).collect()
    } else {
        records.into_iter().map(|r| compute(r, toolkit)).collect()
    };

    let mut outcome = ComputeOutcome::default();
    for result in results {
        match (result, policy) {
            (Ok(rec), _) => outcome.records.push(rec),
            (Err(e), DescriptorErrorPolicy::Abort) => return Err(e),
            (Err(e), DescriptorErrorPolicy::Skip) => {
                warn!("se omite {}: {}", e.canonical_id, e.reason);
                outcome.skipped.push(e);
            }
        }
    }
    Ok(outcome)
}
