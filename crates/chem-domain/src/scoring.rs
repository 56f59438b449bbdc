//! Puntuación compuesta de drug-likeness.
//!
//! score = (500 - MW) / 500 + penalización(LogP) + (5 - HBD) / 5 + (10 - HBA) / 10
//!
//! Heurística ajustada a mano; sin normalización, recorte ni pesos extra.
//! Mayor puntuación = mejor candidato.
use crate::DescriptorSet;

/// Puntúa la lipofilia. La banda óptima (1, 2] se evalúa antes que la
/// aceptable (-0.5, 5], que la contiene.
pub fn log_p_penalty(value: f64) -> f64 {
    if value > 1.0 && value <= 2.0 {
        1.0
    } else if value > -0.5 && value <= 5.0 {
        0.5
    } else {
        0.0
    }
}

pub fn drug_likeness_score(d: &DescriptorSet) -> f64 {
    (500.0 - d.avg_molecular_weight) / 500.0
    + log_p_penalty(d.log_p)
    + (5.0 - d.hbd as f64) / 5.0
    + (10.0 - d.hba as f64) / 10.0
}
