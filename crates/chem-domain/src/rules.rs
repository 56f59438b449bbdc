//! Reglas de drug-likeness (Lipinski).
//!
//! Los límites son exactos: peso molecular con `<` estricto, el resto con
//! `<=`. No cambiar la inclusividad de los bordes.
use serde::{Deserialize, Serialize};

use crate::DescriptorSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFlags {
    pub passes_rule_of_three: bool,
    /// Solo informativa: no interviene en la puntuación ni en el filtrado.
    pub passes_rule_of_five: bool,
}

impl RuleFlags {
    pub fn evaluate(d: &DescriptorSet) -> Self {
        RuleFlags { passes_rule_of_three: passes_rule_of_three(d),
                    passes_rule_of_five: passes_rule_of_five(d) }
    }
}

/// Regla de tres (lead discovery): MW < 300, LogP <= 3, HBD <= 3, HBA <= 3.
pub fn passes_rule_of_three(d: &DescriptorSet) -> bool {
    d.avg_molecular_weight < 300.0 && d.log_p <= 3.0 && d.hbd <= 3 && d.hba <= 3
}

/// Regla de cinco: MW < 500, LogP <= 5, HBD <= 5, HBA <= 10.
pub fn passes_rule_of_five(d: &DescriptorSet) -> bool {
    d.avg_molecular_weight < 500.0 && d.log_p <= 5.0 && d.hbd <= 5 && d.hba <= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(mw: f64, log_p: f64, hbd: u32, hba: u32) -> DescriptorSet {
        DescriptorSet { hba,
                        hbd,
                        tpsa: 0.0,
                        avg_molecular_weight: mw,
                        aromatic_rings: 0,
                        chiral_centres: 0,
                        heavy_atoms: 0,
                        log_p,
                        refractivity: 0.0 }
    }

    #[test]
    fn test_rule_of_three_boundaries() {
        assert!(passes_rule_of_three(&set(299.999, 3.0, 3, 3)));
        assert!(!passes_rule_of_three(&set(300.0, 3.0, 3, 3)));
        assert!(!passes_rule_of_three(&set(200.0, 3.0001, 3, 3)));
        assert!(!passes_rule_of_three(&set(200.0, 1.0, 4, 3)));
        assert!(!passes_rule_of_three(&set(200.0, 1.0, 3, 4)));
    }

    #[test]
    fn test_rule_of_five_boundaries() {
        assert!(passes_rule_of_five(&set(499.99, 5.0, 5, 10)));
        assert!(!passes_rule_of_five(&set(500.0, 5.0, 5, 10)));
        assert!(!passes_rule_of_five(&set(400.0, 5.01, 5, 10)));
        assert!(!passes_rule_of_five(&set(400.0, 2.0, 6, 10)));
        assert!(!passes_rule_of_five(&set(400.0, 2.0, 5, 11)));
    }

    #[test]
    fn test_flags_evaluate_both() {
        let flags = RuleFlags::evaluate(&set(400.0, 2.0, 2, 4));
        assert!(!flags.passes_rule_of_three);
        assert!(flags.passes_rule_of_five);
    }
}
