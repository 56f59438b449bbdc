use chem_domain::{JoinedRecord, ResolutionResult};
use log::debug;

use crate::data::Catalog;

/// Unión interna por identificador canónico, en el orden de `results`.
///
/// Se descartan sin error los `UNMATCHED`, los identificadores ausentes del
/// catálogo y las entradas sin estructura. Nunca duplica un resultado.
pub fn join(results: &[ResolutionResult], catalog: &Catalog) -> Vec<JoinedRecord> {
    results.iter()
           .filter_map(|r| {
               if !r.is_matched() {
                   return None;
               }
               let Some(entry) = catalog.get(&r.canonical_id) else {
                   debug!("'{}' -> {} no está en el catálogo", r.original_name, r.canonical_id);
                   return None;
               };
               let joined = JoinedRecord::join(r, entry);
               if joined.is_none() {
                   debug!("{} no tiene estructura en el catálogo", r.canonical_id);
               }
               joined
           })
           .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chem_domain::{CatalogEntry, MatchType};

    fn catalog() -> Catalog {
        Catalog::from_entries(vec![CatalogEntry { canonical_id: "CHEMBL477".into(),
                                                  canonical_name: "ADENOSINE".into(),
                                                  structure: "Nc1ncnc2c1ncn2C1OC(CO)C(O)C1O".into(),
                                                  known_targets: "Adenosine receptor".into() },
                                   CatalogEntry { canonical_id: "CHEMBL999".into(),
                                                  canonical_name: "NO STRUCTURE".into(),
                                                  structure: String::new(),
                                                  known_targets: String::new() }])
    }

    #[test]
    fn test_join_filters_misses() {
        let results = vec![ResolutionResult::matched("Adenosine", "CHEMBL477", MatchType::Exact),
                           ResolutionResult::unmatched("BG8967"),
                           ResolutionResult::matched("Mystery", "CHEMBL404", MatchType::Fuzzy),
                           ResolutionResult::matched("Blank", "CHEMBL999", MatchType::Exact),
                           ResolutionResult::matched("Adenocard", "CHEMBL477", MatchType::Exact)];
        let joined = join(&results, &catalog());
        assert_eq!(joined.len(), 2);
        assert!(joined.len() <= results.len());
        assert_eq!(joined[0].original_name, "Adenosine");
        assert_eq!(joined[1].original_name, "Adenocard");
        assert!(joined.iter().all(|j| !j.structure.is_empty()));
    }

    #[test]
    fn test_join_empty_inputs() {
        assert!(join(&[], &catalog()).is_empty());
        let results = vec![ResolutionResult::matched("Adenosine", "CHEMBL477", MatchType::Exact)];
        assert!(join(&results, &Catalog::default()).is_empty());
    }
}
