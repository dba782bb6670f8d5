use super::{BlockSummary, MempoolEntry};
use crate::explorer_client::{Block, MempoolTransaction};
use serde::Serialize;

/// Upper bounds applied to each upstream list before it is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLimits {
    pub max_blocks: usize,
    pub max_mempool_entries: usize,
}

impl Default for CacheLimits {
    fn default() -> Self {
        Self {
            max_blocks: 15,
            max_mempool_entries: 10,
        }
    }
}

/// Everything served by the cache-backed endpoints, always published as one unit.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSnapshot {
    pub blocks: Vec<BlockSummary>,
    pub mempool: Vec<MempoolEntry>,
}

impl CacheSnapshot {
    /// Keeps the leading entries of each list in upstream order and drops every
    /// field the endpoints don't serve.
    pub fn project(
        blocks: Vec<Block>,
        mempool: Vec<MempoolTransaction>,
        limits: CacheLimits,
    ) -> Self {
        Self {
            blocks: blocks
                .into_iter()
                .take(limits.max_blocks)
                .map(BlockSummary::from)
                .collect(),
            mempool: mempool
                .into_iter()
                .take(limits.max_mempool_entries)
                .map(MempoolEntry::from)
                .collect(),
        }
    }
}
