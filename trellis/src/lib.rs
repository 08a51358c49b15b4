//! Hierarchical (parent/child) views over flat, row-oriented data.
//!
//! `trellis` reconstructs tree structure from two columns (a unique
//! row identifier and a parent identifier), computes every row's
//! nesting depth, tracks expand/collapse state, and filters the
//! source's exposed index down to the rows not hidden beneath a
//! collapsed ancestor. The designated tree column's values are
//! decorated with indentation and a drill-down glyph.
//!
//! Rows live behind the narrow [`source::RowSource`] trait; storage,
//! schema resolution, sorting and filtering stay upstream. Toggle
//! operations never rebuild the index themselves; they report
//! whether a rebuild is due so the caller can batch work before one
//! [`view::TreeView::apply`].
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), trellis::TreeViewError> {
//! use trellis::prelude::*;
//!
//! let mut source = MemorySource::new(["id", "parent", "name"]);
//! source.push_row(&[Some("1"), None, Some("Root")]);
//! source.push_row(&[Some("2"), Some("1"), Some("Child")]);
//!
//! let mut view = TreeView::new(source, TreeViewConfig::new("id", "parent", "name"));
//! view.enable()?;
//! view.apply()?;
//!
//! // Expandable rows start collapsed, so only the root is exposed.
//! assert_eq!(view.visible_rows(), vec![0]);
//! assert_eq!(view.cell(0, "name").as_deref(), Some("▶ Root"));
//!
//! if view.click(0, None).needs_apply() {
//!     view.apply()?;
//! }
//! assert_eq!(view.visible_rows(), vec![0, 1]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod meta;
pub mod source;
pub mod view;

pub use error::TreeViewError;
pub use view::TreeView;

pub mod prelude {
    pub use crate::error::TreeViewError;
    pub use crate::meta::{ExpandState, RowMeta};
    pub use crate::source::{MemorySource, RowSource};
    pub use crate::view::{ClickOutcome, ExpandSnapshot, GlyphSet, TreeView, TreeViewConfig};
}
