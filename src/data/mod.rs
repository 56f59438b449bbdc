pub mod catalog;

pub use catalog::{load_synonyms, Catalog};
