mod favorites;
mod history;
mod preferences;
mod store;

pub use favorites::*;
pub use history::*;
pub use preferences::*;
pub use store::*;
