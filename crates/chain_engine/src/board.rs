//! Board storage and positional queries
//!
//! The board is a fixed rows x cols grid of [`Cell`]s in a row-major
//! `Vec`. It knows about geometry only: bounds, per-position capacity
//! and orthogonal adjacency. All mutation beyond plain cell writes lives
//! in the game module.

use crate::constants::{CORNER_CAPACITY, EDGE_CAPACITY, INTERIOR_CAPACITY};
use crate::types::{Cell, GridPos};

/// Orthogonal neighbor offsets: up, down, left, right.
const ORTHO: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Fixed-size grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Dimension validation happens at session
    /// creation; this constructor assumes sane inputs.
    pub fn new(rows: usize, cols: usize) -> Board {
        Board {
            rows,
            cols,
            cells: vec![Cell::EMPTY; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Convert a coordinate to its row-major linear index.
    #[inline]
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Check if a coordinate is within board bounds.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the cell at a coordinate. Caller must ensure bounds.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.flat_index(row, col)]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let idx = self.flat_index(row, col);
        &mut self.cells[idx]
    }

    /// Maximum orbs the cell holds before it becomes unstable.
    ///
    /// Pure function of position: 1 at the four corners, 2 on non-corner
    /// edges, 3 in the interior. Never changes for the lifetime of the
    /// board.
    pub fn capacity(&self, row: usize, col: usize) -> u32 {
        let on_row_edge = row == 0 || row == self.rows - 1;
        let on_col_edge = col == 0 || col == self.cols - 1;
        if on_row_edge && on_col_edge {
            CORNER_CAPACITY
        } else if on_row_edge || on_col_edge {
            EDGE_CAPACITY
        } else {
            INTERIOR_CAPACITY
        }
    }

    /// Iterate the in-bounds orthogonal neighbors of a coordinate.
    ///
    /// Corner cells yield two neighbors, edge cells three, interior
    /// cells four. A cell's capacity is one less than its neighbor
    /// count, so an explosion carrying more than capacity + 1 orbs
    /// loses the surplus off-grid.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = GridPos> + '_ {
        ORTHO.iter().filter_map(move |&(dr, dc)| {
            let nr = row.checked_add_signed(dr)?;
            let nc = col.checked_add_signed(dc)?;
            self.in_bounds(nr, nc).then_some(GridPos::new(nr, nc))
        })
    }

    /// Iterate all coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| GridPos::new(r, c)))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
