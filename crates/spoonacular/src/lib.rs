mod client;
mod error;
mod query;

pub use client::*;
pub use error::*;
pub use query::*;
