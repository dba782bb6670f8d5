use crate::explorer_client::Block;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub id: String,
    pub height: u64,
    pub timestamp: i64,
    pub tx_count: u64,
}

impl From<Block> for BlockSummary {
    fn from(block: Block) -> Self {
        Self {
            id: block.id,
            height: block.height,
            timestamp: block.timestamp,
            tx_count: block.tx_count,
        }
    }
}
