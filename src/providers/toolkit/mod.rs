pub mod implementations;
pub mod trait_toolkit;
