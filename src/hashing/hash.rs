use sha2::{Digest, Sha256};

use chem_domain::ScoredRecord;

/// Huella del lote: SHA-256 en hex de las tripletas (identificador,
/// puntuación, rango) en el orden del reporte. La puntuación entra por sus
/// bits, sin redondeo.
pub fn ranking_fingerprint(records: &[ScoredRecord]) -> String {
    let mut hasher = Sha256::new();
    for r in records {
        hasher.update(r.canonical_id().as_bytes());
        hasher.update([0u8]);
        hasher.update(r.score().to_bits().to_be_bytes());
        hasher.update(r.rank.to_be_bytes());
    }
    format!("{:x}", hasher.finalize())
}
