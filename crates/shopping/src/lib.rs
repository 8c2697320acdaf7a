mod consolidation;
mod list;

pub use consolidation::*;
pub use list::*;
