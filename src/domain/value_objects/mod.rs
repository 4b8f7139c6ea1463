//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod filter;
mod property;
mod selection_mode;
mod selection_state;

pub use filter::{
    FilterAction, FilterOutcome, FilterTarget, FilterValue, TupleElement, TupleFilter, TupleOperator,
    TUPLE_FILTER_SCHEMA, TUPLE_FILTER_TYPE,
};
pub use property::{PropertyChanges, PropertyId};
pub use selection_mode::SelectionMode;
pub use selection_state::SelectionState;
