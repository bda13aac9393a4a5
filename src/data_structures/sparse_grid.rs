use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::{Error, Result};

/// A two-dimensional sparse container that only materializes cells holding
/// something other than a configured default value.
///
/// Storage is a mapping from row index to a mapping from column index to
/// value, so lookup is O(1) amortized and space is proportional to the
/// number of non-default cells. A grid is either fixed-size (indices past
/// the configured bounds are an error) or growable (bounds extend through
/// [`SparseGrid::ensure_capacity`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseGrid<T>
where
    T: Clone + PartialEq + Debug,
{
    /// Stored cells: row index -> (column index -> value)
    rows: HashMap<usize, HashMap<usize, T>>,

    /// One past the largest addressable row
    row_bound: usize,

    /// One past the largest addressable column
    col_bound: usize,

    /// Whether the bounds were fixed at construction
    fixed: bool,

    /// Value reported for cells that are not stored
    default: T,
}

impl<T> SparseGrid<T>
where
    T: Clone + PartialEq + Debug,
{
    /// Creates an empty growable grid whose bounds extend as cells are written
    pub fn growable(default: T) -> Self {
        SparseGrid {
            rows: HashMap::new(),
            row_bound: 0,
            col_bound: 0,
            fixed: false,
            default,
        }
    }

    /// Creates an empty fixed-size grid; indices past the bounds are rejected
    pub fn with_bounds(rows: usize, cols: usize, default: T) -> Self {
        SparseGrid {
            rows: HashMap::new(),
            row_bound: rows,
            col_bound: cols,
            fixed: true,
            default,
        }
    }

    /// Returns the current row bound
    pub fn row_count(&self) -> usize {
        self.row_bound
    }

    /// Returns the current column bound
    pub fn col_count(&self) -> usize {
        self.col_bound
    }

    /// Returns true if the bounds were fixed at construction
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Returns the default value reported for absent cells
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Returns the number of explicitly stored cells
    pub fn len(&self) -> usize {
        self.rows.values().map(|cells| cells.len()).sum()
    }

    /// Returns true if no cell is explicitly stored
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrows the stored cells of one row, if any are stored
    pub fn row(&self, row: usize) -> Option<&HashMap<usize, T>> {
        self.rows.get(&row)
    }

    /// Grows the bounds to cover at least `rows` x `cols` and returns the
    /// resulting bounds. On a fixed-size grid a request past the bounds
    /// fails with `IndexOutOfRange`; a request inside them is a no-op.
    pub fn ensure_capacity(&mut self, rows: usize, cols: usize) -> Result<(usize, usize)> {
        if self.fixed {
            if rows > self.row_bound {
                return Err(Error::IndexOutOfRange {
                    index: rows - 1,
                    bound: self.row_bound,
                });
            }
            if cols > self.col_bound {
                return Err(Error::IndexOutOfRange {
                    index: cols - 1,
                    bound: self.col_bound,
                });
            }
        } else {
            self.row_bound = self.row_bound.max(rows);
            self.col_bound = self.col_bound.max(cols);
        }
        Ok((self.row_bound, self.col_bound))
    }

    /// Writes one cell. Values equal to the default are not stored; writing
    /// the default over a stored cell clears it, so only non-default values
    /// ever occupy storage. Fixed-size grids reject out-of-bound indices,
    /// growable grids extend their bounds to cover the index.
    pub fn put(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.ensure_capacity(row + 1, col + 1)?;
        if value == self.default {
            if let Some(cells) = self.rows.get_mut(&row) {
                cells.remove(&col);
                if cells.is_empty() {
                    self.rows.remove(&row);
                }
            }
        } else {
            self.rows.entry(row).or_default().insert(col, value);
        }
        Ok(())
    }

    /// Reads one cell, yielding the default for cells that are not stored.
    /// Fixed-size grids reject out-of-bound indices; growable grids answer
    /// any index without growing.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if self.fixed {
            if row >= self.row_bound {
                return Err(Error::IndexOutOfRange {
                    index: row,
                    bound: self.row_bound,
                });
            }
            if col >= self.col_bound {
                return Err(Error::IndexOutOfRange {
                    index: col,
                    bound: self.col_bound,
                });
            }
        }
        Ok(self
            .rows
            .get(&row)
            .and_then(|cells| cells.get(&col))
            .cloned()
            .unwrap_or_else(|| self.default.clone()))
    }

    /// Expands the grid into a dense row-major matrix of its current bounds
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        let mut dense = vec![vec![self.default.clone(); self.col_bound]; self.row_bound];
        for (&row, cells) in &self.rows {
            for (&col, value) in cells {
                dense[row][col] = value.clone();
            }
        }
        dense
    }

    /// Builds a fixed-size grid from a dense matrix, omitting cells equal to
    /// `default`. Round trip: `from_dense(&grid.to_dense(), d)` reproduces a
    /// grid with the same stored cells and bounds.
    pub fn from_dense(dense: &[Vec<T>], default: T) -> Self {
        let rows = dense.len();
        let cols = dense.first().map_or(0, Vec::len);
        let mut grid = SparseGrid::with_bounds(rows, cols, default);
        for (i, row) in dense.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                if *value != grid.default {
                    grid.rows.entry(i).or_default().insert(j, value.clone());
                }
            }
        }
        grid
    }
}
