//! Resolvedor basado en un índice en memoria de nombres conocidos.
//!
//! Se ajusta una sola vez con pares (nombre, identificador) y después solo se
//! consulta. Orden de búsqueda: coincidencia exacta sobre el nombre
//! normalizado y, si no hay, coincidencia aproximada Jaro-Winkler por encima
//! del umbral. Los candidatos se ordenan por similitud descendente y, en
//! empate, por orden de ajuste; se toma siempre el primero.
use std::collections::HashMap;

use chem_domain::{MatchType, Query, ResolutionResult};
use log::debug;

use crate::providers::resolver::trait_resolver::NameResolver;

pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.90;

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub canonical_id: String,
    pub similarity: f64,
    pub match_type: MatchType,
}

#[derive(Debug, Clone)]
pub struct IndexResolver {
    exact: HashMap<String, String>,
    // (nombre normalizado, id) en orden de ajuste, sin nombres repetidos
    names: Vec<(String, String)>,
    fuzzy_threshold: f64,
}

impl IndexResolver {
    /// Ajusta el índice. Si un nombre normalizado aparece con varios
    /// identificadores, gana el primero.
    pub fn fit<I, N, D>(pairs: I) -> Self
        where I: IntoIterator<Item = (N, D)>,
              N: AsRef<str>,
              D: AsRef<str>
    {
        let mut exact = HashMap::new();
        let mut names = Vec::new();
        for (name, id) in pairs {
            let key = normalize(name.as_ref());
            let id = id.as_ref().trim();
            if key.is_empty() || id.is_empty() || exact.contains_key(&key) {
                continue;
            }
            exact.insert(key.clone(), id.to_string());
            names.push((key, id.to_string()));
        }
        debug!("índice de resolución ajustado con {} nombres", names.len());
        IndexResolver { exact,
                        names,
                        fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD }
    }

    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Candidatos ordenados por preferencia, sin identificadores repetidos.
    pub fn candidates(&self, name: &str) -> Vec<Candidate> {
        let key = normalize(name);
        if key.is_empty() {
            return Vec::new();
        }
        if let Some(id) = self.exact.get(&key) {
            return vec![Candidate { canonical_id: id.clone(),
                                    similarity: 1.0,
                                    match_type: MatchType::Exact }];
        }
        let mut scored: Vec<(f64, &str)> = self.names
                                               .iter()
                                               .map(|(n, id)| (strsim::jaro_winkler(&key, n), id.as_str()))
                                               .filter(|(sim, _)| *sim >= self.fuzzy_threshold)
                                               .collect();
        // sort_by es estable: en empate se conserva el orden de ajuste
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        let mut out: Vec<Candidate> = Vec::new();
        for (similarity, id) in scored {
            if out.iter().any(|c| c.canonical_id == id) {
                continue;
            }
            out.push(Candidate { canonical_id: id.to_string(),
                                 similarity,
                                 match_type: MatchType::Fuzzy });
        }
        out
    }
}

impl NameResolver for IndexResolver {
    fn get_name(&self) -> &str {
        "index_resolver"
    }

    fn get_version(&self) -> &str {
        "0.1.0"
    }

    fn resolve(&self, query: &Query) -> ResolutionResult {
        match self.candidates(query.as_str()).into_iter().next() {
            Some(best) => {
                debug!("'{}' -> {} ({}, {:.3})", query, best.canonical_id, best.match_type, best.similarity);
                ResolutionResult::matched(query.as_str(), best.canonical_id, best.match_type)
            }
            None => {
                debug!("'{}' sin candidato", query);
                ResolutionResult::unmatched(query.as_str())
            }
        }
    }
}

/// Minúsculas y solo caracteres alfanuméricos: "PC-32765" -> "pc32765".
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
