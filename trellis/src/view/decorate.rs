//! Tree column decoration.

use crate::meta::{ExpandState, RowMeta};

use super::config::GlyphSet;

/// Prefix `value` with indentation and a state glyph.
///
/// A blank value on a non-expandable row passes through untouched so
/// an empty leaf cell doesn't show a bare indentation glyph.
pub(crate) fn decorate(value: Option<String>, meta: RowMeta, glyphs: &GlyphSet) -> Option<String> {
    let blank = value.as_deref().unwrap_or("").is_empty();
    if blank && !meta.expand.is_expandable() {
        return value;
    }
    let glyph = match meta.expand {
        ExpandState::Collapsed => &glyphs.collapsed,
        ExpandState::Expanded => &glyphs.expanded,
        ExpandState::Leaf => &glyphs.leaf,
    };
    let mut out = glyphs.indent.repeat(meta.depth as usize);
    out.push_str(glyph);
    out.push_str(value.as_deref().unwrap_or_default());
    Some(out)
}
