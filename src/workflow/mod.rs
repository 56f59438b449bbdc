//! Etapas del pipeline, consumidas en secuencia:
//! resolución -> unión con catálogo -> descriptores y reglas -> ranking.
pub mod compute;
pub mod join;
pub mod manager;
pub mod rank;

pub use compute::{compute, compute_all, ComputeOutcome, DescriptorErrorPolicy};
pub use join::join;
pub use manager::{DrugPropertyPipeline, PipelineOptions, PipelineReport, StageCounts};
pub use rank::rank;
