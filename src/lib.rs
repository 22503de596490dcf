//! shadowfn - exported/unexported shadow-pair analyzer
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use shadowfn_analyzer as analyzer;
pub use shadowfn_ast as ast;
pub use shadowfn_symbols as symbols;
