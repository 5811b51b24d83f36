//! Interpretable classification trees for categorical data.
//!
//! A [`Table`] of string cells, whose last column is the class, is split
//! recursively on the attribute with the greatest information gain until
//! every subset is pure. The result is a [`Tree`] that can be printed as
//! rules or as an indented structure.

// Modules
pub mod builder;
pub mod constants;
pub mod errors;
pub mod metrics;
pub mod reader;
pub mod table;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use builder::{InductionConfig, TreeBuilder};
pub use errors::InfoTreeError;
pub use metrics::{attribute_information, class_entropy, EntropyMethod};
pub use reader::read_csv;
pub use table::Table;
pub use tree::Tree;
