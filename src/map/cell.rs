use crate::errors::MapError;
use crate::geometry::{HexCoord, HEX_NEIGHBORS};

use std::fmt;


/// Distance of a cell the search has not reached yet
pub const UNREACHED: u32 = u32::MAX;


/// Handle of a cell inside its map's arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}


/// What occupies a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Free,
    Start,
    Destination,
    Tower, // hazard: never expanded, and poisons its neighbours
    NoFly, // never entered
}

impl CellKind {

    /// Map file symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(CellKind::Free),
            'S' => Some(CellKind::Start),
            'D' => Some(CellKind::Destination),
            'T' => Some(CellKind::Tower),
            'N' => Some(CellKind::NoFly),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            CellKind::Free => '.',
            CellKind::Start => 'S',
            CellKind::Destination => 'D',
            CellKind::Tower => 'T',
            CellKind::NoFly => 'N',
        }
    }
}


/// A single hex on the map
///
/// Adjacency and kind are fixed when the map is built.
/// `distance_from_start`, `predecessor`, `enqueued` and `finalized` belong to the
/// search and are only written while a search runs over the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    pub coord: HexCoord,
    pub(crate) neighbors: [Option<CellId>; HEX_NEIGHBORS],
    pub distance_from_start: u32,
    pub predecessor: Option<CellId>,
    pub enqueued: bool,
    pub finalized: bool,
}

impl Cell {

    pub fn new(kind: CellKind, coord: HexCoord) -> Self {
        Self {
            kind,
            coord,
            neighbors: [None; HEX_NEIGHBORS],
            distance_from_start: UNREACHED,
            predecessor: None,
            enqueued: false,
            finalized: false,
        }
    }

    /// Neighbour in slot `index`, None when that side is off the map
    pub fn neighbor(&self, index: usize) -> Result<Option<CellId>, MapError> {
        self.neighbors
            .get(index)
            .copied()
            .ok_or(MapError::InvalidNeighborIndex(index))
    }

    /// Present neighbours in slot order
    pub fn neighbors(&self) -> impl Iterator<Item = CellId> + '_ {
        self.neighbors.iter().flatten().copied()
    }

    pub(crate) fn set_neighbor(&mut self, index: usize, neighbor: Option<CellId>) -> Result<(), MapError> {
        let slot = self.neighbors
            .get_mut(index)
            .ok_or(MapError::InvalidNeighborIndex(index))?;
        *slot = neighbor;
        Ok(())
    }

    pub fn is_obstructed(&self) -> bool {
        self.kind == CellKind::Tower
    }

    pub fn is_no_fly(&self) -> bool {
        self.kind == CellKind::NoFly
    }

    pub fn is_destination(&self) -> bool {
        self.kind == CellKind::Destination
    }

    pub fn is_start(&self) -> bool {
        self.kind == CellKind::Start
    }

    /// Forget everything a previous search wrote
    pub fn reset_search_state(&mut self) {
        self.distance_from_start = UNREACHED;
        self.predecessor = None;
        self.enqueued = false;
        self.finalized = false;
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_unreached() {
        let cell = Cell::new(CellKind::Free, HexCoord::new(0, 0));
        assert_eq!(cell.distance_from_start, UNREACHED);
        assert!(!cell.enqueued && !cell.finalized);
        assert_eq!(cell.neighbors().count(), 0);
    }

    #[test]
    fn test_neighbor_index_bounds() {
        let mut cell = Cell::new(CellKind::Free, HexCoord::new(0, 0));
        cell.set_neighbor(5, Some(CellId(3))).unwrap();

        assert_eq!(cell.neighbor(5).unwrap(), Some(CellId(3)));
        assert_eq!(cell.neighbor(0).unwrap(), None);
        assert!(matches!(cell.neighbor(6), Err(MapError::InvalidNeighborIndex(6))));
        assert!(matches!(cell.set_neighbor(9, None), Err(MapError::InvalidNeighborIndex(9))));
    }

    #[test]
    fn test_symbols_round_trip() {
        for kind in [CellKind::Free, CellKind::Start, CellKind::Destination, CellKind::Tower, CellKind::NoFly] {
            assert_eq!(CellKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(CellKind::from_symbol('?'), None);
    }

    #[test]
    fn test_reset_search_state() {
        let mut cell = Cell::new(CellKind::Tower, HexCoord::new(1, 1));
        cell.distance_from_start = 4;
        cell.predecessor = Some(CellId(0));
        cell.enqueued = true;
        cell.finalized = true;

        cell.reset_search_state();
        assert_eq!(cell, Cell::new(CellKind::Tower, HexCoord::new(1, 1)));
        assert!(cell.is_obstructed());
    }
}
