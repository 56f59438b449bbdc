use chem_domain::{dense_ranks, EvaluatedRecord, ScoredRecord};

/// Asigna rango denso descendente sobre el lote completo y ordena por rango.
/// El orden es estable: empates conservan el orden de la unión.
pub fn rank(records: Vec<EvaluatedRecord>) -> Vec<ScoredRecord> {
    let scores: Vec<f64> = records.iter().map(|r| r.score).collect();
    let ranks = dense_ranks(&scores);
    let mut scored: Vec<ScoredRecord> = records.into_iter()
                                               .zip(ranks)
                                               .map(|(evaluated, rank)| ScoredRecord { evaluated, rank })
                                               .collect();
    scored.sort_by_key(|r| r.rank);
    scored
}
