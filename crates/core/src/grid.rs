//! Grid module - storage and queries for the board
//!
//! The grid is a columns x rows field of cells, each empty or holding a tile.
//! Dimensions are fixed at construction. Uses a flat vector in row-major
//! order (y * columns + x); coordinates are (x, y) with y = 0 at the top.
//!
//! The grid only stores and answers questions. All sliding/merging rules
//! live in [`crate::engine`], all spawning in [`crate::spawn`]; those two
//! are the only intended mutators, so the occupancy guards here
//! (`CellOccupied`, `CellAlreadyFree`) firing at runtime means an internal
//! consistency bug, not a user-facing condition.

use thiserror::Error;

use crate::types::{Cell, Direction, Tile};

/// Errors from grid construction and cell access.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Board dimensions must both be non-zero. Fatal at construction.
    #[error("grid dimensions must be non-zero (got {columns}x{rows})")]
    InvalidConfig { columns: u8, rows: u8 },
    /// Coordinate outside the grid extents. Never silently clamped.
    #[error("coordinates ({x}, {y}) are outside the grid")]
    OutOfBounds { x: u8, y: u8 },
    /// Attempted to place a tile on a cell that already holds one.
    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: u8, y: u8 },
    /// Attempted to remove or upgrade a tile from an empty cell.
    #[error("cell ({x}, {y}) is already free")]
    CellAlreadyFree { x: u8, y: u8 },
}

/// The game board: a fixed-size field of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: u8,
    rows: u8,
    /// Flat cell storage, row-major order (y * columns + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells empty.
    pub fn new(columns: u8, rows: u8) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::InvalidConfig { columns, rows });
        }
        Ok(Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: u8, y: u8) -> Result<usize, GridError> {
        if x >= self.columns || y >= self.rows {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(y as usize * self.columns as usize + x as usize)
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Get the tile at (x, y), if any.
    pub fn tile(&self, x: u8, y: u8) -> Result<Option<Tile>, GridError> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Check whether the cell at (x, y) is empty.
    pub fn is_free(&self, x: u8, y: u8) -> Result<bool, GridError> {
        self.index(x, y).map(|idx| self.cells[idx].is_none())
    }

    /// Occupy an empty cell with a tile.
    pub fn place_tile(&mut self, x: u8, y: u8, tile: Tile) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        if self.cells[idx].is_some() {
            return Err(GridError::CellOccupied { x, y });
        }
        self.cells[idx] = Some(tile);
        Ok(())
    }

    /// Free a cell, returning the tile that was there.
    pub fn remove_tile(&mut self, x: u8, y: u8) -> Result<Tile, GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx]
            .take()
            .ok_or(GridError::CellAlreadyFree { x, y })
    }

    /// Increment the level of the tile at (x, y), returning the upgraded tile.
    ///
    /// Merge support: the resident tile keeps its identity and gains a level.
    pub fn upgrade_tile(&mut self, x: u8, y: u8) -> Result<Tile, GridError> {
        let idx = self.index(x, y)?;
        match self.cells[idx].as_mut() {
            Some(tile) => {
                tile.level += 1;
                Ok(*tile)
            }
            None => Err(GridError::CellAlreadyFree { x, y }),
        }
    }

    /// Number of empty cells, for terminal detection and spawn feasibility.
    pub fn count_free(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// The coordinates of one row or column, ordered so that index 0 is the
    /// cell closest to the edge tiles slide toward for `direction`.
    ///
    /// `axis_index` selects a row (y) for Left/Right and a column (x) for
    /// Up/Down. This ordering is the single place direction-dependence is
    /// resolved; everything downstream treats a line as "slide toward
    /// index 0".
    pub fn line(&self, axis_index: u8, direction: Direction) -> Result<Vec<(u8, u8)>, GridError> {
        match direction {
            Direction::Left => {
                let y = axis_index;
                self.index(0, y)?;
                Ok((0..self.columns).map(|x| (x, y)).collect())
            }
            Direction::Right => {
                let y = axis_index;
                self.index(0, y)?;
                Ok((0..self.columns).rev().map(|x| (x, y)).collect())
            }
            Direction::Up => {
                let x = axis_index;
                self.index(x, 0)?;
                Ok((0..self.rows).map(|y| (x, y)).collect())
            }
            Direction::Down => {
                let x = axis_index;
                self.index(x, 0)?;
                Ok((0..self.rows).rev().map(|y| (x, y)).collect())
            }
        }
    }

    /// All cells in row-major order (for rendering).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a grid from per-cell levels for testing.
    ///
    /// `None` is an empty cell; `Some(level)` places a tile of that level
    /// with ids minted in reading order.
    #[cfg(test)]
    pub fn from_levels(levels: Vec<Vec<Option<u8>>>) -> Self {
        let rows = levels.len() as u8;
        let columns = levels[0].len() as u8;
        assert!(levels.iter().all(|row| row.len() == columns as usize));

        let mut grid = Self::new(columns, rows).unwrap();
        let mut next_id = 0;
        for (y, row) in levels.iter().enumerate() {
            for (x, level) in row.iter().enumerate() {
                if let Some(level) = level {
                    grid.place_tile(x as u8, y as u8, Tile::new(next_id, *level))
                        .unwrap();
                    next_id += 1;
                }
            }
        }
        grid
    }

    /// Per-cell levels in (row, column) order for testing assertions.
    #[cfg(test)]
    pub fn to_levels(&self) -> Vec<Vec<Option<u8>>> {
        (0..self.rows)
            .map(|y| {
                (0..self.columns)
                    .map(|x| self.tile(x, y).unwrap().map(|tile| tile.level))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_calculation() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.index(0, 0), Ok(0));
        assert_eq!(grid.index(3, 0), Ok(3));
        assert_eq!(grid.index(0, 1), Ok(4));
        assert_eq!(grid.index(3, 2), Ok(11));
        assert_eq!(grid.index(4, 0), Err(GridError::OutOfBounds { x: 4, y: 0 }));
        assert_eq!(grid.index(0, 3), Err(GridError::OutOfBounds { x: 0, y: 3 }));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 4),
            Err(GridError::InvalidConfig { columns: 0, rows: 4 })
        );
        assert_eq!(
            Grid::new(4, 0),
            Err(GridError::InvalidConfig { columns: 4, rows: 0 })
        );
    }

    #[test]
    fn test_place_and_remove() {
        let mut grid = Grid::new(4, 4).unwrap();
        let tile = Tile::new(7, 2);

        grid.place_tile(1, 2, tile).unwrap();
        assert_eq!(grid.tile(1, 2), Ok(Some(tile)));
        assert_eq!(grid.is_free(1, 2), Ok(false));

        assert_eq!(grid.remove_tile(1, 2), Ok(tile));
        assert_eq!(grid.is_free(1, 2), Ok(true));
    }

    #[test]
    fn test_occupancy_guards() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.place_tile(0, 0, Tile::new(0, 0)).unwrap();

        assert_eq!(
            grid.place_tile(0, 0, Tile::new(1, 0)),
            Err(GridError::CellOccupied { x: 0, y: 0 })
        );
        assert_eq!(
            grid.remove_tile(2, 2),
            Err(GridError::CellAlreadyFree { x: 2, y: 2 })
        );
        assert_eq!(
            grid.upgrade_tile(2, 2),
            Err(GridError::CellAlreadyFree { x: 2, y: 2 })
        );
    }

    #[test]
    fn test_upgrade_keeps_identity() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.place_tile(3, 3, Tile::new(42, 1)).unwrap();

        let upgraded = grid.upgrade_tile(3, 3).unwrap();
        assert_eq!(upgraded, Tile::new(42, 2));
        assert_eq!(grid.tile(3, 3), Ok(Some(Tile::new(42, 2))));
    }

    #[test]
    fn test_count_free() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.count_free(), 16);

        grid.place_tile(0, 0, Tile::new(0, 0)).unwrap();
        grid.place_tile(3, 3, Tile::new(1, 0)).unwrap();
        assert_eq!(grid.count_free(), 14);

        grid.remove_tile(0, 0).unwrap();
        assert_eq!(grid.count_free(), 15);
    }

    #[test]
    fn test_line_orientation() {
        // 3 columns x 2 rows: lines must start at the edge tiles slide toward.
        let grid = Grid::new(3, 2).unwrap();

        assert_eq!(
            grid.line(1, Direction::Left).unwrap(),
            vec![(0, 1), (1, 1), (2, 1)]
        );
        assert_eq!(
            grid.line(1, Direction::Right).unwrap(),
            vec![(2, 1), (1, 1), (0, 1)]
        );
        assert_eq!(
            grid.line(2, Direction::Up).unwrap(),
            vec![(2, 0), (2, 1)]
        );
        assert_eq!(
            grid.line(2, Direction::Down).unwrap(),
            vec![(2, 1), (2, 0)]
        );
    }

    #[test]
    fn test_line_axis_out_of_range() {
        let grid = Grid::new(3, 2).unwrap();
        assert!(grid.line(2, Direction::Left).is_err());
        assert!(grid.line(3, Direction::Up).is_err());
    }

    #[test]
    fn test_from_levels_round_trip() {
        let levels = vec![
            vec![Some(0), None, Some(2)],
            vec![None, Some(1), None],
        ];
        let grid = Grid::from_levels(levels.clone());
        assert_eq!(grid.to_levels(), levels);
        assert_eq!(grid.count_free(), 3);
    }
}
