//! The collision grid: map parsing and world-space point queries.

use glam::Vec2;
use thiserror::Error;

use crate::cell::{decode, Cell, Spawn, VOID_FLOOR};

/// Errors raised while building a grid from map codes.
///
/// These are fatal at load time; a level never starts from a bad map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("map has no cells")]
    Empty,

    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A level's collision grid.
///
/// Owns a row-major array of [`Cell`]s plus the spawn records extracted
/// during parsing. Cell `(col, row)` is centered at world
/// `(col * cell_size, row * cell_size)`, so world coordinates resolve to a
/// cell by *rounding* `coord / cell_size` to the nearest integer.
#[derive(Debug, Clone)]
pub struct GridMap {
    cells: Vec<Cell>,
    cols: usize,
    rows: usize,
    cell_size: f32,
    spawns: Vec<Spawn>,
}

impl GridMap {
    /// Build a grid from a rectangular array of map codes.
    ///
    /// Fails if the map is empty or any row's length differs from the
    /// first row's.
    pub fn parse(codes: &[Vec<u8>], cell_size: f32) -> Result<Self, MapError> {
        let rows = codes.len();
        let cols = codes.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        let mut spawns = Vec::new();

        for (row, line) in codes.iter().enumerate() {
            if line.len() != cols {
                return Err(MapError::Ragged {
                    row,
                    len: line.len(),
                    expected: cols,
                });
            }
            for (col, &code) in line.iter().enumerate() {
                let (cell, spawn_kind) = decode(code);
                if let Some(kind) = spawn_kind {
                    spawns.push(Spawn {
                        kind,
                        position: Vec2::new(col as f32 * cell_size, row as f32 * cell_size),
                    });
                }
                cells.push(cell);
            }
        }

        log::debug!(
            "parsed map: {}x{} cells, {} spawns",
            cols,
            rows,
            spawns.len()
        );

        Ok(Self {
            cells,
            cols,
            rows,
            cell_size,
            spawns,
        })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Side length of a cell in world units.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// The cell at grid coordinates, if in range.
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            Some(&self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Monster placements extracted from the map.
    pub fn spawns(&self) -> &[Spawn] {
        &self.spawns
    }

    /// Resolve world coordinates to the nearest cell, or `None` off-grid.
    fn locate(&self, x: f32, z: f32) -> Option<(usize, usize)> {
        let col = (x / self.cell_size).round() as i64;
        let row = (z / self.cell_size).round() as i64;
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            None
        } else {
            Some((col as usize, row as usize))
        }
    }

    /// Whether the cell under a world point blocks horizontal movement.
    /// Off-grid coordinates are always solid.
    pub fn is_wall(&self, x: f32, z: f32) -> bool {
        match self.locate(x, z) {
            Some((col, row)) => self.cells[row * self.cols + col].is_wall,
            None => true,
        }
    }

    /// Floor height under a world point. Off-grid coordinates report the
    /// [`VOID_FLOOR`] sentinel.
    pub fn floor_height(&self, x: f32, z: f32) -> f32 {
        match self.locate(x, z) {
            Some((col, row)) => self.cells[row * self.cols + col].floor,
            None => VOID_FLOOR,
        }
    }

    /// World coordinates of the first walkable height-0 cell in row-major
    /// order, or the origin when the map has none.
    pub fn start_position(&self) -> Vec2 {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = &self.cells[row * self.cols + col];
                if !cell.is_wall && cell.floor == 0.0 {
                    return Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size);
                }
            }
        }
        Vec2::ZERO
    }

    /// Centers of all cells carrying an item marker, for the pickup layer.
    pub fn item_cells(&self) -> Vec<Vec2> {
        let mut items = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.cells[row * self.cols + col].has_item {
                    items.push(Vec2::new(
                        col as f32 * self.cell_size,
                        row as f32 * self.cell_size,
                    ));
                }
            }
        }
        items
    }

    /// A small built-in arena for the demo binary and integration tests:
    /// perimeter walls around open floor with a step, a high platform, a
    /// pit, an item and one monster of each kind.
    pub fn demo() -> Self {
        let codes = vec![
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 3, 4, 0, 0, 0, 2, 0, 1],
            vec![1, 0, 0, 0, 3, 4, 0, 0, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 0, 0, 0, 0, 6, 0, 0, 1],
            vec![1, 0, 5, 5, 0, 0, 0, 0, 0, 0, 0, 1],
            vec![1, 0, 5, 5, 0, 0, 0, 0, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 0, 0, 0, 7, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ];
        Self::parse(&codes, 2.0).expect("demo map is well-formed")
    }
}
