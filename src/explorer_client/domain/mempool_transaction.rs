use serde::{Deserialize, Serialize};

/// Fee summary of an unconfirmed transaction, as listed by `/mempool/recent`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MempoolTransaction {
    pub txid: String,
    pub fee: u64,
    pub vsize: u64,
    #[serde(default)]
    pub value: Option<u64>,
}
