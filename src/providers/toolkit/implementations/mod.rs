#[cfg(feature = "rdkit")]
pub mod rdkit_toolkit;
pub mod test_provider;
