pub mod index_resolver;
pub mod test_provider;
