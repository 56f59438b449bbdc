//! Fronteras de capacidad hacia los colaboradores externos: resolución de
//! nombres y toolkit quimioinformático. Cada una es un trait con una
//! implementación real y una determinista para tests.
pub mod resolver;
pub mod toolkit;

pub use resolver::implementations::index_resolver::IndexResolver;
pub use resolver::implementations::test_provider::FixedResolver;
pub use resolver::trait_resolver::NameResolver;
#[cfg(feature = "rdkit")]
pub use toolkit::implementations::rdkit_toolkit::RdkitToolkit;
pub use toolkit::implementations::test_provider::FixedToolkit;
pub use toolkit::trait_toolkit::StructureToolkit;
