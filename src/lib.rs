pub mod cli;
pub mod config;
pub mod observability;
mod session;

pub use session::*;
