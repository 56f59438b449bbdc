// chem-domain library entry point
//
// Tipos de valor y funciones puras del pipeline de drug-likeness: resolución
// de nombres, registro de referencia, descriptores, reglas de Lipinski,
// puntuación y ranking denso. Sin I/O ni dependencias de RDKit.
pub mod descriptors;
pub mod error;
pub mod ranking;
pub mod record;
pub mod resolution;
pub mod rules;
pub mod scoring;

pub use descriptors::{DescriptorKind, DescriptorSet};
pub use error::DomainError;
pub use ranking::dense_ranks;
pub use record::{CatalogEntry, EvaluatedRecord, JoinedRecord, ScoredRecord};
pub use resolution::{MatchType, Query, ResolutionResult};
pub use rules::{passes_rule_of_five, passes_rule_of_three, RuleFlags};
pub use scoring::{drug_likeness_score, log_p_penalty};
