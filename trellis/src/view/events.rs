//! Toggle click results.

/// Result of a toggle click on a visible index position.
///
/// Clicks never rebuild the exposed index themselves. A `Changed`
/// outcome tells the caller a rebuild is due, which it may batch with
/// surrounding toggles before a single
/// [`TreeView::apply`](super::TreeView::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The row is not expandable (or the position is out of range);
    /// the next pipeline stage may handle the click instead.
    Ignored,
    /// The click was consumed but the state already matched.
    Consumed,
    /// The click was consumed and the expand state changed.
    Changed,
}

impl ClickOutcome {
    /// Whether the click was handled by the tree view.
    pub fn is_consumed(self) -> bool {
        !matches!(self, ClickOutcome::Ignored)
    }

    /// Whether the caller should rebuild the visible index.
    pub fn needs_apply(self) -> bool {
        matches!(self, ClickOutcome::Changed)
    }
}
