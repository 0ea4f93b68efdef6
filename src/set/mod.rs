/*!
 * Set Module
 * Public concurrent set API: shard array ownership and key routing
 */

mod shard;
mod sharded;

pub use sharded::ShardedSet;
