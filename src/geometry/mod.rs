use num_traits::{Num, Signed, Float};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


/// 2D Point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}


/// Vertical spacing between hex rows when neighbouring centres are 1 apart
const ROW_HEIGHT: f64 = 0.866_025_403_784_438_6; // sqrt(3) / 2

/// Offsets to the six neighbours of a hex, for even and odd rows
/// Slot order: E, NE, NW, W, SW, SE
const EVEN_ROW_OFFSETS: [(i64, i64); 6] = [(0, 1), (-1, 0), (-1, -1), (0, -1), (1, -1), (1, 0)];
const ODD_ROW_OFFSETS: [(i64, i64); 6] = [(0, 1), (-1, 1), (-1, 0), (0, -1), (1, 0), (1, 1)];

/// Number of neighbour slots around a hex
pub const HEX_NEIGHBORS: usize = 6;


/// Position of a hex in "odd-r" offset coordinates
/// Odd rows are shifted half a cell to the right
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexCoord {
    pub row: i64,
    pub col: i64,
}

impl HexCoord {

    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Coordinate in neighbour slot `direction` (0..6)
    /// Returns None for an out of range direction
    pub fn neighbor(&self, direction: usize) -> Option<HexCoord> {
        let offsets = if self.row & 1 == 0 { &EVEN_ROW_OFFSETS } else { &ODD_ROW_OFFSETS };
        let (dr, dc) = offsets.get(direction)?;
        Some(HexCoord::new(self.row + dr, self.col + dc))
    }

    /// Axial (q, r) form; the third cube axis is -q - r
    pub fn to_axial(&self) -> (i64, i64) {
        let q = self.col - (self.row - (self.row & 1)) / 2;
        (q, self.row)
    }

    /// Centre of the hex, adjacent centres are exactly 1 apart
    pub fn center(&self) -> Point {
        let shift = if self.row & 1 == 0 { 0.0 } else { 0.5 };
        Point {
            x: self.col as f64 + shift,
            y: self.row as f64 * ROW_HEIGHT,
        }
    }
}

/// Number of steps between two hexes on an unobstructed grid
pub fn hex_distance(a: &HexCoord, b: &HexCoord) -> i64 {
    let (q1, r1) = a.to_axial();
    let (q2, r2) = b.to_axial();
    let s_diff = (q1 + r1) - (q2 + r2);
    (manhattan_distance(q1, r1, q2, r2) + s_diff.abs()) / 2
}
