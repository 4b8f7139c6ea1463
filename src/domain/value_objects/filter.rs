//! Tuple filter value objects
//!
//! A tuple filter describes a selection as a list of value rows, one value
//! per hierarchy level from root to the deepest level. The JSON shape matches
//! what the host's filter engine consumes.

use serde::{Deserialize, Serialize};

/// Schema marker carried by every tuple filter
pub const TUPLE_FILTER_SCHEMA: &str = "http://powerbi.com/product/schema#tuple";

/// Host code for the tuple filter type
pub const TUPLE_FILTER_TYPE: u8 = 6;

/// Source table and column a hierarchy level maps to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FilterTarget {
    pub table: String,
    pub column: String,
}

impl FilterTarget {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

impl std::fmt::Display for FilterTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// A single value inside a tuple, typed the way the host expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FilterValue {
    /// Largest integer an `f64` represents exactly
    const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

    /// Coerce a display value: numeric text becomes a number, anything else stays text.
    ///
    /// Blank and non-finite values (`inf`, `NaN`) are kept as text.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FilterValue::Text(raw.to_string());
        }
        if let Ok(int) = trimmed.parse::<i64>() {
            return FilterValue::Integer(int);
        }
        match trimmed.parse::<f64>() {
            Ok(float) if float.is_finite() => {
                if float.fract() == 0.0 && float.abs() < Self::EXACT_INTEGER_LIMIT {
                    FilterValue::Integer(float as i64)
                } else {
                    FilterValue::Float(float)
                }
            }
            _ => FilterValue::Text(raw.to_string()),
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, FilterValue::Text(_))
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::Integer(v) => write!(f, "{}", v),
            FilterValue::Float(v) => write!(f, "{}", v),
            FilterValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// One element of a tuple row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleElement {
    pub value: FilterValue,
}

impl From<FilterValue> for TupleElement {
    fn from(value: FilterValue) -> Self {
        Self { value }
    }
}

/// Comparison operator of a tuple filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TupleOperator {
    #[default]
    In,
}

/// Host-consumable tuple filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleFilter {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "filterType")]
    pub filter_type: u8,
    pub operator: TupleOperator,
    pub target: Vec<FilterTarget>,
    pub values: Vec<Vec<TupleElement>>,
}

impl TupleFilter {
    /// Create an `In` tuple filter over the given targets and rows
    pub fn new(target: Vec<FilterTarget>, values: Vec<Vec<TupleElement>>) -> Self {
        Self {
            schema: TUPLE_FILTER_SCHEMA.to_string(),
            filter_type: TUPLE_FILTER_TYPE,
            operator: TupleOperator::In,
            target,
            values,
        }
    }

    /// Number of tuple rows
    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    /// Rows rendered as plain strings, for logs and text output
    pub fn rows_as_strings(&self) -> Vec<Vec<String>> {
        self.values
            .iter()
            .map(|row| row.iter().map(|e| e.value.to_string()).collect())
            .collect()
    }
}

/// How the host should treat the filter it receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterAction {
    /// Merge the filter into the host's filter set
    Apply,
    /// Remove any filter this slicer previously applied
    Clear,
}

impl FilterAction {
    /// Numeric code understood by the host
    pub fn code(&self) -> u8 {
        match self {
            FilterAction::Apply => 0,
            FilterAction::Clear => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(FilterAction::Apply),
            1 => Some(FilterAction::Clear),
            _ => None,
        }
    }
}

/// Result of building a filter from the current selection
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// Apply this tuple filter
    Apply(TupleFilter),
    /// Nothing is selected; remove the filter instead of applying an empty `In` list
    Clear,
}

impl FilterOutcome {
    pub fn filter(&self) -> Option<&TupleFilter> {
        match self {
            FilterOutcome::Apply(filter) => Some(filter),
            FilterOutcome::Clear => None,
        }
    }

    pub fn action(&self) -> FilterAction {
        match self {
            FilterOutcome::Apply(_) => FilterAction::Apply,
            FilterOutcome::Clear => FilterAction::Clear,
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, FilterOutcome::Clear)
    }
}
