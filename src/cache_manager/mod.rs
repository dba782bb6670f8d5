mod cache;
mod cache_manager;
mod domain;

pub use cache::*;
pub use cache_manager::*;
pub use domain::*;
