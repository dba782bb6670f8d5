mod domain;
mod explorer_client;

pub use domain::*;
pub use explorer_client::*;
