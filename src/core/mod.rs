/*!
 * Core Module
 * Fundamental types, error handling, and synchronization primitives
 */

pub mod errors;
pub mod hints;
pub mod key;
pub mod sync;
pub mod topology;

// Re-export for convenience
pub use errors::*;
pub use hints::*;
pub use key::ShardKey;
pub use sync::{SpinLock, SpinLockGuard};
