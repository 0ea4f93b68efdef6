/*!
 * Synchronization Primitives
 *
 * Mutual exclusion tuned for very short critical sections:
 * - Spinlock with CPU relax hints for shard-local state
 *
 * # Performance
 *
 * - Single atomic test-and-set on the uncontended path
 * - `spin_loop` relax hint while contended (PAUSE/YIELD)
 * - No wait queue: zero bookkeeping, no FIFO fairness
 */

mod spinlock;

pub use spinlock::{SpinLock, SpinLockGuard};
