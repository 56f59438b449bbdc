use serde::{Deserialize, Serialize};
use std::fmt;

/// Nombre de fármaco tal como lo entrega el llamador. Inmutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query(String);

impl Query {
    pub fn new(name: impl Into<String>) -> Self {
        Query(name.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Query::new(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Query(s)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calidad de la coincidencia reportada por el resolvedor de nombres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchType {
    Exact,
    Fuzzy,
    Unmatched,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "EXACT",
            MatchType::Fuzzy => "FUZZY",
            MatchType::Unmatched => "UNMATCHED",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resultado de resolver un `Query`: uno por nombre de entrada, en el mismo
/// orden. Un `UNMATCHED` lleva identificador vacío.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub original_name: String,
    pub canonical_id: String,
    pub match_type: MatchType,
}

impl ResolutionResult {
    pub fn matched(original_name: impl Into<String>, canonical_id: impl Into<String>, match_type: MatchType) -> Self {
        ResolutionResult { original_name: original_name.into(),
                           canonical_id: canonical_id.into(),
                           match_type }
    }

    pub fn unmatched(original_name: impl Into<String>) -> Self {
        ResolutionResult { original_name: original_name.into(),
                           canonical_id: String::new(),
                           match_type: MatchType::Unmatched }
    }

    pub fn is_matched(&self) -> bool {
        self.match_type != MatchType::Unmatched && !self.canonical_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_has_empty_id() {
        let r = ResolutionResult::unmatched("BG8967");
        assert_eq!(r.canonical_id, "");
        assert_eq!(r.match_type, MatchType::Unmatched);
        assert!(!r.is_matched());
    }

    #[test]
    fn test_match_type_labels() {
        assert_eq!(MatchType::Exact.to_string(), "EXACT");
        assert_eq!(MatchType::Fuzzy.to_string(), "FUZZY");
        assert_eq!(MatchType::Unmatched.to_string(), "UNMATCHED");
    }

    #[test]
    fn test_blank_query() {
        assert!(Query::new("   ").is_blank());
        assert!(!Query::from("ibrutinib").is_blank());
    }
}
