//! Filter builder
//!
//! Turns the current selection into a tuple filter. Tuples are always
//! expressed at the deepest level of the hierarchy: every selected node at
//! that level contributes one row holding the values of its ancestor chain
//! followed by its own value.

use tracing::debug;

use crate::domain::entities::NodeTree;
use crate::domain::value_objects::{
    FilterOutcome, FilterTarget, FilterValue, TupleElement, TupleFilter,
};
use crate::error::SlicerResult;

/// Builds tuple filters from a node tree
pub struct FilterBuilder;

impl FilterBuilder {
    /// Build the filter for the current selection.
    ///
    /// Returns [`FilterOutcome::Clear`] when no row would be produced, so an
    /// empty selection never turns into an empty `In` list.
    pub fn build(tree: &NodeTree) -> SlicerResult<FilterOutcome> {
        let Some(max_level) = tree.index().max_level() else {
            return Ok(FilterOutcome::Clear);
        };

        let mut rows = Vec::new();
        for id in tree.ids() {
            let node = tree.get(id);
            if !node.is_selected() || node.level != max_level {
                continue;
            }
            let chain = tree.index().ancestor_chain(id)?;
            let row: Vec<TupleElement> = chain
                .into_iter()
                .chain(std::iter::once(id))
                .map(|member| FilterValue::coerce(&tree.get(member).value).into())
                .collect();
            rows.push(row);
        }

        if rows.is_empty() {
            debug!("no selected rows at level {max_level}, clearing filter");
            return Ok(FilterOutcome::Clear);
        }

        let filter = TupleFilter::new(Self::targets(tree), rows);
        debug!(rows = ?filter.rows_as_strings(), "applied filter values");
        Ok(FilterOutcome::Apply(filter))
    }

    /// Distinct (table, column) pairs of selected nodes: tables in order of
    /// first appearance, columns grouped under their table.
    pub fn targets(tree: &NodeTree) -> Vec<FilterTarget> {
        let mut tables: Vec<(&str, Vec<&str>)> = Vec::new();
        for node in tree.selected() {
            let FilterTarget { table, column } = &node.filter_target;
            let position = match tables.iter().position(|(t, _)| *t == table.as_str()) {
                Some(position) => position,
                None => {
                    tables.push((table.as_str(), Vec::new()));
                    tables.len() - 1
                }
            };
            let columns = &mut tables[position].1;
            if !columns.contains(&column.as_str()) {
                columns.push(column.as_str());
            }
        }

        tables
            .into_iter()
            .flat_map(|(table, columns)| {
                columns
                    .into_iter()
                    .map(move |column| FilterTarget::new(table, column))
            })
            .collect()
    }
}
