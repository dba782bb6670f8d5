mod block;
mod mempool_transaction;

pub use block::*;
pub use mempool_transaction::*;
