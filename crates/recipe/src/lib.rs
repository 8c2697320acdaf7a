mod difficulty;
mod export;
mod listing;
mod scaling;
mod types;

pub use difficulty::*;
pub use export::*;
pub use listing::*;
pub use scaling::*;
pub use types::*;
