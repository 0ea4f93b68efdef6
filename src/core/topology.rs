/*!
 * Hardware Topology
 *
 * CPU-topology-aware sizing for the shard array. Pure `#[inline]` functions
 * rather than a cached singleton: the compiler can constant-fold and inline
 * these into call sites, and construction is the only caller anyway.
 *
 * # Design Rationale
 *
 * - **Power-of-2 shards**: enable fast modulo via bitwise AND (x & (n-1))
 * - **CPU-proportional scaling**: more cores benefit from more shards
 * - **Fixed floor**: 128 shards keeps contention low even when the core
 *   count is small or undetectable
 */

/// Number of shards per detected CPU for the default sizing
const SHARDS_PER_CPU: usize = 16;

/// Minimum default shard count
const MIN_DEFAULT_SHARDS: usize = 128;

/// Get the available hardware parallelism
///
/// Returns 0 when the runtime cannot detect it; callers treat that as
/// "unknown" and fall back to the fixed floor.
#[inline]
pub fn cpu_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or_else(|_| {
            log::warn!("Failed to detect CPU count, using fixed default sizing");
            0
        })
}

/// Get the cache line size used for shard padding
///
/// Modern mainstream architectures use 64-byte cache lines (x86-64, ARM64,
/// RISC-V).
#[inline(always)]
pub const fn cache_line_size() -> usize {
    64
}

/// Calculate the default shard count: max(128, CPUs × 16) rounded up to the
/// next power of two
#[inline]
pub fn default_shard_count() -> usize {
    let desired = MIN_DEFAULT_SHARDS.max(cpu_count() * SHARDS_PER_CPU);
    desired.next_power_of_two()
}
