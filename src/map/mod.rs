mod cell;
mod parser;

pub use cell::{Cell, CellId, CellKind, UNREACHED};

use crate::collections::FxIndexMap;
use crate::config::Heuristic;
use crate::errors::MapError;
use crate::geometry::{HexCoord, HEX_NEIGHBORS, hex_distance};


/// Arena of cells a search can run over
///
/// Cells refer to each other by `CellId`, the search reads adjacency through
/// `cell` and writes its bookkeeping through `cell_mut`.
pub trait CellGraph {

    /// Cell the search starts from
    fn start(&self) -> CellId;

    /// Number of cells in the arena, ids run from 0 to len - 1
    fn len(&self) -> usize;

    fn cell(&self, id: CellId) -> &Cell;

    fn cell_mut(&mut self, id: CellId) -> &mut Cell;

    /// Estimated remaining distance from a cell to the destination
    /// Must never overestimate for the search to return shortest paths
    fn heuristic(&self, id: CellId, heuristic: Heuristic) -> f64;

    /// True if any neighbour of the cell is a hazard
    fn has_hazard_adjacency(&self, id: CellId) -> bool {
        self.cell(id)
            .neighbors()
            .any(|n| self.cell(n).is_obstructed())
    }

    /// Clear the bookkeeping left behind by a previous search
    fn reset(&mut self) {
        for index in 0..self.len() {
            self.cell_mut(CellId(index)).reset_search_state();
        }
    }
}


/// Rectangular hex map in "odd-r" offset layout
/// Exactly one start and one destination cell
#[derive(Clone, Debug)]
pub struct HexMap {
    rows: usize,
    cols: usize,
    cells: FxIndexMap<HexCoord, Cell>, // index in the map is the CellId
    start: CellId,
    destination: CellId,
}

impl HexMap {

    /// Build a map from row-major cell kinds and link every cell to its neighbours
    pub fn new(rows: usize, cols: usize, kinds: Vec<CellKind>) -> Result<Self, MapError> {
        if rows == 0 || cols == 0 {
            return Err(MapError::InvalidMap("map must have at least one row and column".into()));
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| MapError::InvalidMap(format!("a {rows}x{cols} map is too large")))?;
        if kinds.len() != expected {
            return Err(MapError::InvalidMap(format!(
                "expected {expected} cells for a {rows}x{cols} map, found {}", kinds.len()
            )));
        }

        let mut cells: FxIndexMap<HexCoord, Cell> = FxIndexMap::default();
        for (index, kind) in kinds.into_iter().enumerate() {
            let coord = HexCoord::new((index / cols) as i64, (index % cols) as i64);
            cells.insert(coord, Cell::new(kind, coord));
        }

        let start = Self::find_unique(&cells, CellKind::Start)?;
        let destination = Self::find_unique(&cells, CellKind::Destination)?;

        // Link neighbours, slots that fall off the map stay empty
        for index in 0..cells.len() {
            let coord = cells[index].coord;
            for direction in 0..HEX_NEIGHBORS {
                let neighbor = coord
                    .neighbor(direction)
                    .and_then(|n| cells.get_index_of(&n))
                    .map(CellId);
                cells[index].set_neighbor(direction, neighbor)?;
            }
        }

        Ok(Self { rows, cols, cells, start, destination })
    }

    fn find_unique(cells: &FxIndexMap<HexCoord, Cell>, kind: CellKind) -> Result<CellId, MapError> {
        let mut found = cells
            .values()
            .enumerate()
            .filter(|(_, cell)| cell.kind == kind)
            .map(|(index, _)| CellId(index));

        match (found.next(), found.next()) {
            (Some(id), None) => Ok(id),
            (None, _) => Err(MapError::InvalidMap(format!("no '{}' cell on the map", kind.symbol()))),
            (Some(_), Some(_)) => Err(MapError::InvalidMap(format!("more than one '{}' cell on the map", kind.symbol()))),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn destination(&self) -> CellId {
        self.destination
    }

    /// Cell at a given offset coordinate
    pub fn cell_at(&self, coord: HexCoord) -> Option<CellId> {
        self.cells.get_index_of(&coord).map(CellId)
    }

    /// Draw the map, marking the given cells with '*'
    /// Odd rows are indented by one column to show the hex offset
    pub fn render(&self, marked: &[CellId]) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            if row % 2 == 1 {
                out.push(' ');
            }
            for col in 0..self.cols {
                let index = row * self.cols + col;
                let cell = &self.cells[index];
                let symbol = match cell.kind {
                    CellKind::Free if marked.contains(&CellId(index)) => '*',
                    kind => kind.symbol(),
                };
                if col > 0 {
                    out.push(' ');
                }
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

impl CellGraph for HexMap {

    fn start(&self) -> CellId {
        self.start
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }

    fn heuristic(&self, id: CellId, heuristic: Heuristic) -> f64 {
        let from = &self.cell(id).coord;
        let to = &self.cell(self.destination).coord;

        match heuristic {
            Heuristic::Euclidean => from.center().distance(&to.center()),
            Heuristic::Hex => hex_distance(from, to) as f64,
            Heuristic::Zero => 0.0,
        }
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(rows: &[&str]) -> Vec<CellKind> {
        rows.iter()
            .flat_map(|row| row.chars())
            .map(|c| CellKind::from_symbol(c).unwrap())
            .collect()
    }

    #[test]
    fn test_neighbors_are_linked_both_ways() {
        let map = HexMap::new(3, 3, kinds(&["S..", "...", "..D"])).unwrap();

        for index in 0..map.len() {
            let id = CellId(index);
            for direction in 0..HEX_NEIGHBORS {
                if let Some(n) = map.cell(id).neighbor(direction).unwrap() {
                    let back = map.cell(n).neighbor((direction + 3) % HEX_NEIGHBORS).unwrap();
                    assert_eq!(back, Some(id));
                }
            }
        }

        // corner (0,0) on an even row only touches E, SE
        let corner = map.cell(map.start());
        assert_eq!(corner.neighbors().count(), 2);
        // centre (1,1) is surrounded
        let centre = map.cell_at(HexCoord::new(1, 1)).unwrap();
        assert_eq!(map.cell(centre).neighbors().count(), 6);
    }

    #[test]
    fn test_start_and_destination_must_be_unique() {
        assert!(matches!(
            HexMap::new(1, 3, kinds(&["S.."])),
            Err(MapError::InvalidMap(_))
        ));
        assert!(matches!(
            HexMap::new(1, 3, kinds(&["SSD"])),
            Err(MapError::InvalidMap(_))
        ));
        assert!(matches!(
            HexMap::new(2, 2, kinds(&["SD"])),
            Err(MapError::InvalidMap(_))
        ));
    }

    #[test]
    fn test_cell_count_overflow() {
        assert!(matches!(
            HexMap::new(usize::MAX, 2, kinds(&["SD"])),
            Err(MapError::InvalidMap(_))
        ));
    }

    #[test]
    fn test_hazard_adjacency() {
        let map = HexMap::new(2, 3, kinds(&["S.T", "..D"])).unwrap();

        assert!(!map.has_hazard_adjacency(map.start()));
        let beside_tower = map.cell_at(HexCoord::new(0, 1)).unwrap();
        assert!(map.has_hazard_adjacency(beside_tower));
        assert!(map.has_hazard_adjacency(map.destination()));
    }

    #[test]
    fn test_heuristics() {
        let map = HexMap::new(3, 3, kinds(&["S..", "...", "..D"])).unwrap();
        let start = map.start();

        assert_eq!(map.heuristic(start, Heuristic::Hex), 3.0);
        assert_eq!(map.heuristic(start, Heuristic::Zero), 0.0);
        let straight = map.heuristic(start, Heuristic::Euclidean);
        assert!(straight > 2.0 && straight <= 3.0);
        assert_eq!(map.heuristic(map.destination(), Heuristic::Euclidean), 0.0);
    }

    #[test]
    fn test_render_marks_path() {
        let map = HexMap::new(2, 3, kinds(&["S.N", "..D"])).unwrap();
        let middle = map.cell_at(HexCoord::new(0, 1)).unwrap();

        assert_eq!(map.render(&[map.start(), middle]), "S * N\n . . D\n");
    }
}
