//! Registros que atraviesan el pipeline: entrada de catálogo, registro unido
//! (resolución + catálogo), registro evaluado (descriptores, reglas,
//! puntuación) y registro final con rango.
use serde::{Deserialize, Serialize};

use crate::{drug_likeness_score, DescriptorSet, MatchType, ResolutionResult, RuleFlags};

/// Entrada del catálogo de referencia, indexada por `canonical_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub canonical_id: String,
    pub canonical_name: String,
    pub structure: String,
    pub known_targets: String,
}

impl CatalogEntry {
    pub fn has_structure(&self) -> bool {
        !self.structure.trim().is_empty()
    }
}

/// Unión interna de `ResolutionResult` y `CatalogEntry` por identificador.
/// Siempre tiene estructura no vacía.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedRecord {
    pub original_name: String,
    pub canonical_id: String,
    pub match_type: MatchType,
    pub canonical_name: String,
    pub structure: String,
    pub known_targets: String,
}

impl JoinedRecord {
    /// `None` si el resultado no coincide con la entrada o la entrada no tiene
    /// estructura.
    pub fn join(result: &ResolutionResult, entry: &CatalogEntry) -> Option<Self> {
        if !result.is_matched() || result.canonical_id != entry.canonical_id || !entry.has_structure() {
            return None;
        }
        Some(JoinedRecord { original_name: result.original_name.clone(),
                            canonical_id: entry.canonical_id.clone(),
                            match_type: result.match_type,
                            canonical_name: entry.canonical_name.clone(),
                            structure: entry.structure.clone(),
                            known_targets: entry.known_targets.clone() })
    }
}

/// Registro con descriptores, reglas y puntuación; aún sin rango.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedRecord {
    pub joined: JoinedRecord,
    pub descriptors: DescriptorSet,
    pub flags: RuleFlags,
    pub score: f64,
}

impl EvaluatedRecord {
    pub fn new(joined: JoinedRecord, descriptors: DescriptorSet) -> Self {
        let flags = RuleFlags::evaluate(&descriptors);
        let score = drug_likeness_score(&descriptors);
        EvaluatedRecord { joined,
                          descriptors,
                          flags,
                          score }
    }
}

/// Registro final del reporte. `rank >= 1`, asignado sobre el lote completo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub evaluated: EvaluatedRecord,
    pub rank: u32,
}

impl ScoredRecord {
    pub fn canonical_id(&self) -> &str {
        &self.evaluated.joined.canonical_id
    }
    pub fn score(&self) -> f64 {
        self.evaluated.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, smiles: &str) -> CatalogEntry {
        CatalogEntry { canonical_id: id.into(),
                       canonical_name: "ADENOSINE".into(),
                       structure: smiles.into(),
                       known_targets: "Adenosine receptor A1".into() }
    }

    #[test]
    fn test_join_matching_entry() {
        let r = ResolutionResult::matched("Adenocard", "CHEMBL477", MatchType::Exact);
        let j = JoinedRecord::join(&r, &entry("CHEMBL477", "Nc1ncnc2c1ncn2[C@@H]1O[C@H](CO)[C@@H](O)[C@H]1O")).unwrap();
        assert_eq!(j.original_name, "Adenocard");
        assert_eq!(j.canonical_name, "ADENOSINE");
        assert_eq!(j.match_type, MatchType::Exact);
    }

    #[test]
    fn test_join_rejects_unmatched_and_empty_structure() {
        let unmatched = ResolutionResult::unmatched("BG8967");
        assert!(JoinedRecord::join(&unmatched, &entry("", "C")).is_none());
        let r = ResolutionResult::matched("x", "CHEMBL1", MatchType::Fuzzy);
        assert!(JoinedRecord::join(&r, &entry("CHEMBL1", "  ")).is_none());
        assert!(JoinedRecord::join(&r, &entry("CHEMBL2", "C")).is_none());
    }
}
