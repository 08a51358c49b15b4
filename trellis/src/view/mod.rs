//! Tree view over a flat row source.
//!
//! [`TreeView`] reconstructs parent/child structure from an identifier
//! column and a parent-identifier column, annotates every row with its
//! nesting depth and expand state, and filters the source's exposed
//! index down to the rows not hidden beneath a collapsed ancestor.
//!
//! Control flow: [`TreeView::enable`] resolves the hierarchy over all
//! rows, [`TreeView::apply`] rebuilds the exposed index through the
//! visibility predicate, and [`TreeView::click`] /
//! [`TreeView::reveal`] mutate expand state without rebuilding.
//! Their results (and [`TreeView::needs_apply`]) tell the caller when
//! a rebuild is due, so several toggles can be batched before one
//! `apply`.

mod config;
mod decorate;
mod events;
mod hierarchy;
mod visibility;

pub use config::{GlyphSet, TreeViewConfig};
pub use events::ClickOutcome;

use serde::{Deserialize, Serialize};

use crate::error::TreeViewError;
use crate::meta::{ExpandState, RowMeta};
use crate::source::RowSource;

/// Serializable capture of which rows are expanded, by identifier.
///
/// Identifiers stay meaningful across dataset refreshes, unlike row
/// positions, so a snapshot taken before a reload can be restored
/// after it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandSnapshot {
    /// Identifier values of expanded rows, in row order.
    pub expanded: Vec<String>,
}

/// Hierarchical view over a flat, row-oriented source.
///
/// The view owns its source and writes only the per-row annotation bag
/// and the exposed index; rows and cells are never moved or copied.
/// It starts disabled and behaves as a pass-through until
/// [`TreeView::enable`] succeeds.
#[derive(Debug)]
pub struct TreeView<S: RowSource> {
    source: S,
    config: TreeViewConfig,
    enabled: bool,
    max_depth: u16,
    dirty: bool,
}

impl<S: RowSource> TreeView<S> {
    /// Create a view over `source`. The view starts disabled.
    pub fn new(source: S, config: TreeViewConfig) -> Self {
        Self {
            source,
            config,
            enabled: false,
            max_depth: 0,
            dirty: false,
        }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the underlying source.
    ///
    /// After changing rows, re-enable the view (or at least call
    /// [`TreeView::apply`]) so annotations and the index catch up.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consume the view, returning the source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// The active configuration.
    pub fn config(&self) -> &TreeViewConfig {
        &self.config
    }

    /// Whether the view is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Deepest nesting level found by the last hierarchy rebuild.
    pub fn max_depth(&self) -> u16 {
        self.max_depth
    }

    /// Whether expand state changed since the last [`TreeView::apply`].
    pub fn needs_apply(&self) -> bool {
        self.dirty
    }

    /// Whether `column` is the decorated tree column of an enabled
    /// view.
    pub fn is_tree_column(&self, column: &str) -> bool {
        self.enabled && column == self.config.tree_column
    }

    // -------------------------------------------------------------------------
    // Enable / disable
    // -------------------------------------------------------------------------

    /// Enable the view.
    ///
    /// Validates that all four configured columns resolve (the error
    /// names every missing address and prior state is untouched),
    /// resets the index to the full row set so every row is reachable
    /// for identifier lookups, then resolves depth and expand state
    /// for every row. Expand choices retained from an earlier enabled
    /// period reactivate for rows that still have children.
    pub fn enable(&mut self) -> Result<(), TreeViewError> {
        let mut missing: Vec<String> = Vec::new();
        for column in self.config.required_columns() {
            if !self.source.has_column(column) && !missing.iter().any(|c| c == column) {
                missing.push(column.to_string());
            }
        }
        if !missing.is_empty() {
            log::warn!(
                "tree view not enabled, unresolved column(s): {}",
                missing.join(", ")
            );
            return Err(TreeViewError::MissingColumns { missing });
        }

        self.source.reset_index();
        let resolution = hierarchy::resolve(&self.source, &self.config)?;
        for (row, meta) in resolution.meta.into_iter().enumerate() {
            self.source.set_meta(row, meta);
        }
        self.max_depth = resolution.max_depth;
        self.enabled = true;
        self.dirty = true;
        log::debug!(
            "tree view enabled over {} rows, max depth {}",
            self.source.row_count(),
            self.max_depth
        );
        Ok(())
    }

    /// Disable the view.
    ///
    /// Flattens every row's depth to zero so a downstream stable sort
    /// sees one flat group. Expand state is kept untouched and
    /// reactivates on the next [`TreeView::enable`]. The exposed index
    /// falls back to the source default on the next
    /// [`TreeView::apply`].
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        for row in 0..self.source.row_count() {
            let mut meta = self.source.meta(row);
            meta.depth = 0;
            self.source.set_meta(row, meta);
        }
        self.max_depth = 0;
        self.enabled = false;
        self.dirty = true;
        log::debug!("tree view disabled");
    }

    // -------------------------------------------------------------------------
    // Index rebuild
    // -------------------------------------------------------------------------

    /// Rebuild the exposed index.
    ///
    /// Disabled: resets to the source's default index. Enabled: keeps
    /// exactly the rows with no collapsed ancestor, in source order.
    /// This is the single point where toggled state becomes observable
    /// through row enumeration. A malformed parent chain aborts before
    /// the index is touched.
    pub fn apply(&mut self) -> Result<(), TreeViewError> {
        if !self.enabled {
            self.source.reset_index();
            self.dirty = false;
            return Ok(());
        }
        let visible = visibility::visible_rows(&self.source, &self.config)?;
        self.source
            .build_index(&mut |row| visible.get(row).copied().unwrap_or(false));
        self.dirty = false;
        log::debug!(
            "visible index rebuilt: {} of {} rows",
            self.source.index_len(),
            self.source.row_count()
        );
        Ok(())
    }

    /// Row positions currently exposed by the index, in order.
    pub fn visible_rows(&self) -> Vec<usize> {
        (0..self.source.index_len())
            .filter_map(|pos| self.source.row_at(pos))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Read a cell, decorating the tree column with indentation and a
    /// drill-down glyph.
    ///
    /// Other columns, and every column of a disabled view, pass
    /// through unchanged. A blank cell on a non-expandable row is also
    /// passed through rather than decorated.
    pub fn cell(&self, row: usize, column: &str) -> Option<String> {
        let raw = self.source.cell(row, column);
        if !self.is_tree_column(column) {
            return raw;
        }
        decorate::decorate(raw, self.source.meta(row), &self.config.glyphs)
    }

    /// Annotation for `row` as written by the last hierarchy rebuild.
    pub fn meta(&self, row: usize) -> RowMeta {
        self.source.meta(row)
    }

    // -------------------------------------------------------------------------
    // Toggle / reveal
    // -------------------------------------------------------------------------

    /// Toggle (or set, when `desired` is given) the expand state of
    /// the row at a visible index position.
    ///
    /// Returns [`ClickOutcome::Ignored`] for rows without children so
    /// the caller can hand the click to the next pipeline stage, and
    /// for positions outside the index or a disabled view. Never
    /// rebuilds the index; [`ClickOutcome::Changed`] means a rebuild
    /// is due.
    pub fn click(&mut self, visible_pos: usize, desired: Option<bool>) -> ClickOutcome {
        if !self.enabled {
            return ClickOutcome::Ignored;
        }
        let Some(row) = self.source.row_at(visible_pos) else {
            return ClickOutcome::Ignored;
        };
        let mut meta = self.source.meta(row);
        if !meta.expand.is_expandable() {
            return ClickOutcome::Ignored;
        }
        let target = desired.unwrap_or(!meta.expand.is_expanded());
        if target == meta.expand.is_expanded() {
            return ClickOutcome::Consumed;
        }
        meta.expand = ExpandState::from_expanded(target);
        self.source.set_meta(row, meta);
        self.dirty = true;
        ClickOutcome::Changed
    }

    /// Expand every collapsed strict ancestor of the row identified by
    /// `id`, so the row itself can appear after the next
    /// [`TreeView::apply`].
    ///
    /// The row's own state is never touched. Returns whether any
    /// ancestor changed; an unknown identifier is a no-op.
    pub fn reveal(&mut self, id: &str) -> Result<bool, TreeViewError> {
        let Some(row) = self.source.position_of(&self.config.id_column, id) else {
            return Ok(false);
        };
        let chain: Vec<usize> = hierarchy::ancestors(&self.source, &self.config, row)
            .collect::<Result<_, _>>()?;
        let mut changed = false;
        for ancestor in chain {
            let mut meta = self.source.meta(ancestor);
            if meta.expand == ExpandState::Collapsed {
                meta.expand = ExpandState::Expanded;
                self.source.set_meta(ancestor, meta);
                changed = true;
            }
        }
        if changed {
            self.dirty = true;
        }
        Ok(changed)
    }

    /// Expand every expandable row.
    pub fn expand_all(&mut self) {
        self.set_all(ExpandState::Expanded);
    }

    /// Collapse every expandable row.
    pub fn collapse_all(&mut self) {
        self.set_all(ExpandState::Collapsed);
    }

    fn set_all(&mut self, state: ExpandState) {
        let mut changed = false;
        for row in 0..self.source.row_count() {
            let mut meta = self.source.meta(row);
            if meta.expand.is_expandable() && meta.expand != state {
                meta.expand = state;
                self.source.set_meta(row, meta);
                changed = true;
            }
        }
        if changed {
            self.dirty = true;
        }
    }

    // -------------------------------------------------------------------------
    // Snapshot
    // -------------------------------------------------------------------------

    /// Capture the identifiers of currently expanded rows.
    pub fn snapshot(&self) -> ExpandSnapshot {
        let mut expanded = Vec::new();
        for row in 0..self.source.row_count() {
            if self.source.meta(row).expand == ExpandState::Expanded
                && let Some(id) = self.source.cell(row, &self.config.id_column)
            {
                expanded.push(id);
            }
        }
        ExpandSnapshot { expanded }
    }

    /// Re-expand the rows a snapshot captured.
    ///
    /// Identifiers that no longer exist, or whose rows no longer have
    /// children, are skipped.
    pub fn restore(&mut self, snapshot: &ExpandSnapshot) {
        let mut changed = false;
        for id in &snapshot.expanded {
            if let Some(row) = self.source.position_of(&self.config.id_column, id) {
                let mut meta = self.source.meta(row);
                if meta.expand == ExpandState::Collapsed {
                    meta.expand = ExpandState::Expanded;
                    self.source.set_meta(row, meta);
                    changed = true;
                }
            }
        }
        if changed {
            self.dirty = true;
        }
    }
}
