use serde::{Deserialize, Serialize};

/// A block as listed by the explorer's `/blocks` endpoint.
///
/// Only the fields the cache projects are required, the rest are kept when present.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub height: u64,
    pub timestamp: i64,
    pub tx_count: u64,
    #[serde(default)]
    pub version: Option<i64>,
    #[serde(default)]
    pub merkle_root: Option<String>,
    #[serde(default)]
    pub previousblockhash: Option<String>,
    #[serde(default)]
    pub mediantime: Option<i64>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub weight: Option<u64>,
    #[serde(default)]
    pub bits: Option<u64>,
    #[serde(default)]
    pub nonce: Option<u64>,
    #[serde(default)]
    pub difficulty: Option<f64>,
}
