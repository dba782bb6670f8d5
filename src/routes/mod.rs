mod blocks;
mod health_check;
mod mempool;
mod transaction;

pub use blocks::*;
pub use health_check::*;
pub use mempool::*;
pub use transaction::*;
