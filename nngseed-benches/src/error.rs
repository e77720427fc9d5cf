//! Benchmark setup error type.
//!
//! Aggregates the error types that may arise during benchmark data
//! preparation so that setup functions can propagate failures with `?`
//! instead of using `.expect()`.

use nngseed_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Digraph construction or operation failed.
    #[error("digraph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// A benchmark parameter combination would be invalid.
    #[error("invalid benchmark parameter: {context}")]
    ZeroValue {
        /// A description of the parameter that made this combination invalid.
        context: &'static str,
    },
}
