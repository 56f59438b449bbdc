use std::collections::HashMap;

use chem_domain::{MatchType, Query, ResolutionResult};

use crate::providers::resolver::trait_resolver::NameResolver;

/// Resolvedor determinista para tests: tabla fija nombre -> (id, tipo).
/// Los nombres no registrados resuelven a `UNMATCHED`.
#[derive(Debug, Clone, Default)]
pub struct FixedResolver {
    table: HashMap<String, (String, MatchType)>,
}

impl FixedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, canonical_id: &str, match_type: MatchType) -> Self {
        self.table.insert(name.to_string(), (canonical_id.to_string(), match_type));
        self
    }
}

impl NameResolver for FixedResolver {
    fn get_name(&self) -> &str {
        "fixed_resolver"
    }

    fn get_version(&self) -> &str {
        "1.0.0"
    }

    fn resolve(&self, query: &Query) -> ResolutionResult {
        match self.table.get(query.as_str()) {
            Some((id, MatchType::Unmatched)) if id.is_empty() => ResolutionResult::unmatched(query.as_str()),
            Some((id, match_type)) => ResolutionResult::matched(query.as_str(), id.clone(), *match_type),
            None => ResolutionResult::unmatched(query.as_str()),
        }
    }
}
