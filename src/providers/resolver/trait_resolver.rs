//! Contrato del resolvedor de nombres: un nombre libre produce exactamente un
//! par (identificador canónico, tipo de coincidencia). Si no hay candidato se
//! devuelve un resultado `UNMATCHED`, nunca un error.
use chem_domain::{Query, ResolutionResult};

pub trait NameResolver: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_version(&self) -> &str;

    fn resolve(&self, query: &Query) -> ResolutionResult;

    /// Un resultado por consulta, en el mismo orden.
    fn resolve_all(&self, queries: &[Query]) -> Vec<ResolutionResult> {
        queries.iter().map(|q| self.resolve(q)).collect()
    }
}
