//! Per-row hierarchy annotations.

use serde::{Deserialize, Serialize};

/// Expand/collapse state of a row.
///
/// `Leaf` marks a row without children: it carries no toggle, and a
/// click on it falls through to the next handler. Every hierarchy
/// rebuild re-derives this case, so a row that loses its last child
/// drops back to `Leaf` even if it previously held a collapsed or
/// expanded choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpandState {
    /// No children; not expandable.
    #[default]
    Leaf,
    /// Has children, descendants hidden.
    Collapsed,
    /// Has children, descendants shown.
    Expanded,
}

impl ExpandState {
    /// Whether this row can be expanded or collapsed.
    pub fn is_expandable(self) -> bool {
        !matches!(self, ExpandState::Leaf)
    }

    /// Whether descendants are currently shown.
    pub fn is_expanded(self) -> bool {
        matches!(self, ExpandState::Expanded)
    }

    /// State after a hierarchy rebuild, given whether the row still
    /// has children.
    ///
    /// A previous collapsed/expanded choice survives as long as the
    /// row keeps at least one child; rows that just gained children
    /// start collapsed.
    pub(crate) fn retained(self, has_children: bool) -> ExpandState {
        match (has_children, self) {
            (false, _) => ExpandState::Leaf,
            (true, ExpandState::Leaf) => ExpandState::Collapsed,
            (true, kept) => kept,
        }
    }

    /// Expandable state for a desired expanded flag.
    pub(crate) fn from_expanded(expanded: bool) -> ExpandState {
        if expanded {
            ExpandState::Expanded
        } else {
            ExpandState::Collapsed
        }
    }
}

/// Annotation record kept for every row in the source's metadata bag,
/// keyed by row position.
///
/// Rebuilding the exposed index never touches these; only the
/// hierarchy resolver and the toggle/reveal operations write them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMeta {
    /// Number of ancestors between this row and its root.
    pub depth: u16,
    /// Expand/collapse state.
    pub expand: ExpandState,
}
