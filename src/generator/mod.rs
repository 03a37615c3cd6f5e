//! YAML generation core: pruning and document building

mod builder;
mod prune;

pub use builder::*;
pub use prune::prune;
