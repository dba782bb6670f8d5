use crate::explorer_client::MempoolTransaction;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MempoolEntry {
    pub txid: String,
    pub fee: u64,
    pub vsize: u64,
}

impl From<MempoolTransaction> for MempoolEntry {
    fn from(transaction: MempoolTransaction) -> Self {
        Self {
            txid: transaction.txid,
            fee: transaction.fee,
            vsize: transaction.vsize,
        }
    }
}
