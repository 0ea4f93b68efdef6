/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Set construction errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SetError {
    #[error("Shard count {0} is not a power of two")]
    #[diagnostic(
        code(set::invalid_shard_count),
        help("Pass a power-of-two shard count (8, 16, 32, ...) or 0 to size from hardware parallelism.")
    )]
    InvalidShardCount(usize),
}

/// Common result type for set operations
pub type SetResult<T> = Result<T, SetError>;
