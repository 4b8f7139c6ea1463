//! Domain Services
//!
//! Pure logic over the node tree. No I/O; every service receives the tree
//! it works on.

mod expansion;
mod filter_builder;
mod selection;
mod serializer;
mod tree_index;

pub use expansion::Expansion;
pub use filter_builder::FilterBuilder;
pub use selection::SelectionMachine;
pub use serializer::StateSerializer;
pub use tree_index::{TreeIndex, KEY_SEPARATOR};
