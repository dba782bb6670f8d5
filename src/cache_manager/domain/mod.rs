mod block_summary;
mod cache_snapshot;
mod mempool_entry;

pub use block_summary::*;
pub use cache_snapshot::*;
pub use mempool_entry::*;
