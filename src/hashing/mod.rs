//! Huella estable del lote rankeado: dos ejecuciones con la misma entrada
//! deben producir la misma huella.

pub mod hash;

pub use hash::ranking_fingerprint;
