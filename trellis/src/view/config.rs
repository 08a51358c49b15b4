//! Tree view configuration.

use serde::{Deserialize, Serialize};

/// Glyphs used when decorating the tree column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSet {
    /// Drawn before a collapsed row's value.
    pub collapsed: String,
    /// Drawn before an expanded row's value.
    pub expanded: String,
    /// Drawn before a leaf row's value so cells stay aligned.
    pub leaf: String,
    /// Indentation unit, repeated once per depth level.
    pub indent: String,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self {
            collapsed: "▶ ".into(),
            expanded: "▼ ".into(),
            leaf: "  ".into(),
            indent: "  ".into(),
        }
    }
}

/// Column addresses and glyphs for a tree view.
///
/// Built once before the view is enabled. Enabling validates that all
/// four column addresses resolve on the source.
///
/// ```
/// use trellis::view::TreeViewConfig;
///
/// let config = TreeViewConfig::new("id", "parent_id", "name")
///     .with_group_column("category");
/// assert_eq!(config.group_column, "category");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeViewConfig {
    /// Column holding each row's unique identifier.
    pub id_column: String,
    /// Column holding the parent row's identifier; blank for roots.
    pub parent_column: String,
    /// Column whose displayed value gets decorated.
    pub tree_column: String,
    /// Column handed to downstream grouping stages.
    pub group_column: String,
    /// Decoration glyphs.
    pub glyphs: GlyphSet,
}

impl TreeViewConfig {
    /// Create a configuration. The group column defaults to the tree
    /// column.
    pub fn new(
        id_column: impl Into<String>,
        parent_column: impl Into<String>,
        tree_column: impl Into<String>,
    ) -> Self {
        let tree_column = tree_column.into();
        Self {
            id_column: id_column.into(),
            parent_column: parent_column.into(),
            group_column: tree_column.clone(),
            tree_column,
            glyphs: GlyphSet::default(),
        }
    }

    /// Set the group column.
    pub fn with_group_column(mut self, column: impl Into<String>) -> Self {
        self.group_column = column.into();
        self
    }

    /// Set the decoration glyphs.
    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// The four required column addresses, in configuration order.
    pub(crate) fn required_columns(&self) -> [&str; 4] {
        [
            &self.id_column,
            &self.parent_column,
            &self.tree_column,
            &self.group_column,
        ]
    }
}
