//! Hierarchy resolution over parent-identifier chains.
//!
//! No explicit tree is ever built: every walk follows live parent
//! links through the source's identifier lookup, and depth only
//! depends on ancestry, so rows resolve in any order. Walks are
//! bounded by the row count so a cyclic parent relationship surfaces
//! as [`TreeViewError::ParentCycle`] instead of looping forever.

use crate::error::TreeViewError;
use crate::meta::RowMeta;
use crate::source::RowSource;

use super::config::TreeViewConfig;

/// Staged result of resolving the hierarchy over every row.
pub(crate) struct Resolution {
    /// Annotation per row position, ready to commit.
    pub meta: Vec<RowMeta>,
    /// Deepest nesting level found.
    pub max_depth: u16,
}

/// Position of `row`'s parent, or `None` for a root.
///
/// A parent identifier that matches no row also ends the chain;
/// referential integrity is the dataset's responsibility.
pub(crate) fn parent_of<S: RowSource>(
    source: &S,
    config: &TreeViewConfig,
    row: usize,
) -> Option<usize> {
    let parent_id = source.cell(row, &config.parent_column)?;
    source.position_of(&config.id_column, &parent_id)
}

/// Iterator over the strict ancestors of a row, nearest first.
///
/// Yields `Err` once and stops if the chain outruns the row count.
pub(crate) struct Ancestors<'a, S: RowSource> {
    source: &'a S,
    config: &'a TreeViewConfig,
    row: usize,
    current: usize,
    hops: usize,
    limit: usize,
    done: bool,
}

pub(crate) fn ancestors<'a, S: RowSource>(
    source: &'a S,
    config: &'a TreeViewConfig,
    row: usize,
) -> Ancestors<'a, S> {
    Ancestors {
        source,
        config,
        row,
        current: row,
        hops: 0,
        limit: source.row_count(),
        done: false,
    }
}

impl<S: RowSource> Iterator for Ancestors<'_, S> {
    type Item = Result<usize, TreeViewError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(parent) = parent_of(self.source, self.config, self.current) else {
            self.done = true;
            return None;
        };
        self.hops += 1;
        if self.hops > self.limit {
            self.done = true;
            return Some(Err(TreeViewError::ParentCycle {
                row: self.row,
                limit: self.limit,
            }));
        }
        self.current = parent;
        Some(Ok(parent))
    }
}

/// Number of ancestors above `row`.
pub(crate) fn depth_of<S: RowSource>(
    source: &S,
    config: &TreeViewConfig,
    row: usize,
) -> Result<u16, TreeViewError> {
    let mut depth = 0usize;
    for ancestor in ancestors(source, config, row) {
        ancestor?;
        depth += 1;
    }
    Ok(u16::try_from(depth).unwrap_or(u16::MAX))
}

/// Whether some row's parent identifier equals `row`'s identifier.
pub(crate) fn has_children<S: RowSource>(
    source: &S,
    config: &TreeViewConfig,
    row: usize,
) -> bool {
    match source.cell(row, &config.id_column) {
        Some(id) => source.position_of(&config.parent_column, &id).is_some(),
        None => false,
    }
}

/// Recompute depth and expand state for every row.
///
/// Annotations are staged in the returned [`Resolution`] and written
/// back by the caller only once every row resolved, so a cycle aborts
/// the enable operation without partial metadata writes.
pub(crate) fn resolve<S: RowSource>(
    source: &S,
    config: &TreeViewConfig,
) -> Result<Resolution, TreeViewError> {
    let count = source.row_count();
    let mut meta = Vec::with_capacity(count);
    let mut max_depth = 0;
    for row in 0..count {
        let depth = depth_of(source, config, row)?;
        let expand = source
            .meta(row)
            .expand
            .retained(has_children(source, config, row));
        max_depth = max_depth.max(depth);
        meta.push(RowMeta { depth, expand });
    }
    Ok(Resolution { meta, max_depth })
}
