use serde::{Deserialize, Serialize};

/// One grid-quantized position, `(column, row)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell one step in `dir`. May leave the grid.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i16, i16)> for Cell {
    fn from(pos: (i16, i16)) -> Self {
        Cell { x: pos.0, y: pos.1 }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Pixel-space square covering one cell.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tile {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// The playing field: `width × height` cells of `cell_size` pixels each.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    pub width: i16,
    pub height: i16,
    pub cell_size: i16,
}

impl Grid {
    pub fn new(width: i16, height: i16, cell_size: i16) -> Self {
        Grid {
            width,
            height,
            cell_size,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    pub fn tile(&self, cell: Cell) -> Tile {
        let size = self.cell_size as f32;
        Tile {
            x: cell.x as f32 * size,
            y: cell.y as f32 * size,
            size,
        }
    }

    pub fn pixel_width(&self) -> f32 {
        (self.width as f32) * (self.cell_size as f32)
    }

    pub fn pixel_height(&self) -> f32 {
        (self.height as f32) * (self.cell_size as f32)
    }
}
