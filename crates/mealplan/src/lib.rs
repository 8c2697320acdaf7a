mod generate;
mod types;

pub use generate::*;
pub use types::*;
