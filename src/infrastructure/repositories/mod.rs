//! Repository implementations

mod node_list;

pub use node_list::JsonNodeRepository;
