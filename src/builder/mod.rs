// public modules
pub mod config;
pub mod core;

// private modules
mod setters;

pub use self::config::{ConfigIO, InductionConfig};
pub use self::core::{SplitCandidate, TreeBuilder};
