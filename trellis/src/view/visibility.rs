//! Visibility predicate over ancestor chains.

use crate::error::TreeViewError;
use crate::meta::ExpandState;
use crate::source::RowSource;

use super::config::TreeViewConfig;
use super::hierarchy::ancestors;

/// Whether no ancestor of `row` is collapsed.
///
/// Evaluated from scratch against live parent links on every rebuild.
/// A single ancestor toggle can flip visibility for an arbitrary-size
/// subtree, so no per-row visibility flag is cached across rebuilds.
pub(crate) fn is_visible<S: RowSource>(
    source: &S,
    config: &TreeViewConfig,
    row: usize,
) -> Result<bool, TreeViewError> {
    for ancestor in ancestors(source, config, row) {
        if source.meta(ancestor?).expand == ExpandState::Collapsed {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Evaluate the predicate for every row position.
pub(crate) fn visible_rows<S: RowSource>(
    source: &S,
    config: &TreeViewConfig,
) -> Result<Vec<bool>, TreeViewError> {
    (0..source.row_count())
        .map(|row| is_visible(source, config, row))
        .collect()
}
