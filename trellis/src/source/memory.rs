//! In-memory row source.

use std::collections::HashMap;

use crate::meta::RowMeta;

use super::RowSource;

/// A [`RowSource`] backed by vectors of optional string cells.
///
/// Meant for tests, examples and small datasets. Identifier lookups go
/// through per-column value maps maintained as rows are added; when
/// two rows share a value the first position wins, which is all the
/// existence probes need.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    lookup: HashMap<String, HashMap<String, usize>>,
    meta: Vec<RowMeta>,
    index: Vec<usize>,
}

impl MemorySource {
    /// Create an empty source with the given column names.
    pub fn new<I, T>(columns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let lookup = columns
            .iter()
            .map(|c| (c.clone(), HashMap::new()))
            .collect();
        Self {
            columns,
            rows: Vec::new(),
            lookup,
            meta: Vec::new(),
            index: Vec::new(),
        }
    }

    /// Column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Append a row. Missing trailing cells read as blank; extra
    /// cells beyond the column count are dropped.
    pub fn push_row(&mut self, cells: &[Option<&str>]) {
        self.insert_cells(cells);
        self.meta.push(RowMeta::default());
    }

    /// Replace the whole dataset.
    ///
    /// The metadata bag is kept for row positions that survive the
    /// swap and the index resets to source order; callers re-enable
    /// the view afterwards to recompute the hierarchy.
    pub fn set_rows(&mut self, rows: &[&[Option<&str>]]) {
        let mut meta = std::mem::take(&mut self.meta);
        self.rows.clear();
        self.index.clear();
        for map in self.lookup.values_mut() {
            map.clear();
        }
        for cells in rows {
            self.insert_cells(cells);
        }
        meta.resize(self.rows.len(), RowMeta::default());
        self.meta = meta;
    }

    fn insert_cells(&mut self, cells: &[Option<&str>]) {
        let row: Vec<Option<String>> = (0..self.columns.len())
            .map(|i| cells.get(i).copied().flatten().map(str::to_owned))
            .collect();
        let pos = self.rows.len();
        for (column, value) in self.columns.iter().zip(&row) {
            if let Some(value) = value
                && let Some(map) = self.lookup.get_mut(column)
            {
                map.entry(value.clone()).or_insert(pos);
            }
        }
        self.rows.push(row);
        self.index.push(pos);
    }
}

impl RowSource for MemorySource {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    fn cell(&self, row: usize, column: &str) -> Option<String> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(col)?.clone()
    }

    fn position_of(&self, column: &str, value: &str) -> Option<usize> {
        self.lookup.get(column)?.get(value).copied()
    }

    fn meta(&self, row: usize) -> RowMeta {
        self.meta.get(row).copied().unwrap_or_default()
    }

    fn set_meta(&mut self, row: usize, meta: RowMeta) {
        if let Some(slot) = self.meta.get_mut(row) {
            *slot = meta;
        }
    }

    fn row_at(&self, pos: usize) -> Option<usize> {
        self.index.get(pos).copied()
    }

    fn index_len(&self) -> usize {
        self.index.len()
    }

    fn build_index(&mut self, include: &mut dyn FnMut(usize) -> bool) {
        self.index = (0..self.rows.len()).filter(|&row| include(row)).collect();
    }

    fn reset_index(&mut self) {
        self.index = (0..self.rows.len()).collect();
    }
}
