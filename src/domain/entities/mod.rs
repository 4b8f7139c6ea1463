//! Domain Entities
//!
//! - `Node` - One row of the flattened hierarchy
//! - `NodeTree` - Arena owning the node list of one render pass

mod node;
mod tree;

pub use node::{Node, NodeId};
pub use tree::NodeTree;
