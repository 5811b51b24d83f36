pub mod render;
pub mod tree;

pub use render::{rules, write_rules};
pub use tree::{PreOrder, Tree};
