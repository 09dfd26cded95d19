//! Static tile grid
//!
//! The grid is built once by the plan parser and never changes afterwards.

use serde::{Deserialize, Serialize};

/// Static classification of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Lava,
}

impl Tile {
    /// Tile for a plan character; actor characters and unknown ones are empty
    pub fn from_char(ch: char) -> Self {
        match ch {
            'x' => Tile::Wall,
            '!' => Tile::Lava,
            _ => Tile::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }
}

/// Row-major tile grid, origin at the top-left cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Build a grid from row-major cells. `cells.len()` must equal `width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Tile>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at a cell, `None` outside the grid
    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width.max(1))
    }
}
