//! Grid geometry - maps window pixels to discrete cells
//!
//! The window is split into `GRID_DIVISOR` cells per axis. Cell size is derived
//! per axis as `dimension / GRID_DIVISOR`, so an 800x800 window has 20px cells
//! and a 40x40 grid. Coordinates: (x, y) where x grows right and y grows down.

use crate::types::{Cell, GRID_DIVISOR};

/// Derived grid dimensions for a given window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    width_px: u32,
    height_px: u32,
    cell_w: u32,
    cell_h: u32,
    columns: i32,
    rows: i32,
}

impl GridGeometry {
    /// Build the geometry for a `width_px` x `height_px` window.
    ///
    /// Cell size is clamped to at least one pixel so the geometry is always usable;
    /// configuration validation rejects windows that small before they get here.
    pub fn new(width_px: u32, height_px: u32) -> Self {
        let cell_w = (width_px / GRID_DIVISOR).max(1);
        let cell_h = (height_px / GRID_DIVISOR).max(1);
        Self {
            width_px,
            height_px,
            cell_w,
            cell_h,
            columns: (width_px / cell_w) as i32,
            rows: (height_px / cell_h) as i32,
        }
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// Cell size in pixels as (width, height).
    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_w, self.cell_h)
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        (self.columns as usize) * (self.rows as usize)
    }

    /// The cell containing the window's center pixel.
    pub fn center(&self) -> Cell {
        self.to_cell((self.width_px / 2) as i32, (self.height_px / 2) as i32)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.columns && cell.y >= 0 && cell.y < self.rows
    }

    /// True for cells strictly inside the outermost ring.
    pub fn is_interior(&self, cell: Cell) -> bool {
        cell.x >= 1 && cell.x < self.columns - 1 && cell.y >= 1 && cell.y < self.rows - 1
    }

    /// Interior cells in row-major order.
    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> {
        let (columns, rows) = (self.columns, self.rows);
        (1..rows - 1).flat_map(move |y| (1..columns - 1).map(move |x| Cell::new(x, y)))
    }

    /// Top-left pixel of `cell`.
    pub fn to_pixels(&self, cell: Cell) -> (i32, i32) {
        (cell.x * self.cell_w as i32, cell.y * self.cell_h as i32)
    }

    /// The cell containing pixel `(px, py)`.
    pub fn to_cell(&self, px: i32, py: i32) -> Cell {
        Cell::new(
            px.div_euclid(self.cell_w as i32),
            py.div_euclid(self.cell_h as i32),
        )
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_WINDOW_WIDTH,
            crate::types::DEFAULT_WINDOW_HEIGHT,
        )
    }
}
