use crate::errors::SearchError;
use crate::map::{CellGraph, CellId};

/// Construct the shortest path from the goal cell back to the start cell
/// Returns the ordered path as a vector of cells from start to goal
/// graph: G - cells with predecessor links written by a finished search
/// goal: CellId - cell the search stopped at
pub fn shortest_path<G>(graph: &G, goal: CellId) -> Result<Vec<CellId>, SearchError>
where
    G: CellGraph,
{
    let start = graph.start();
    let mut path = vec![goal];
    let mut current = goal;

    // Trace back from goal to start
    while current != start {
        // a chain longer than the map must loop
        if path.len() > graph.len() {
            return Err(SearchError::BrokenPath(current.0));
        }

        match graph.cell(current).predecessor {
            Some(previous) => {
                path.push(previous);
                current = previous;
            }
            None => return Err(SearchError::BrokenPath(current.0)),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::HexMap;
    use crate::geometry::HexCoord;

    fn line_map() -> HexMap {
        HexMap::parse("1 4\nS..D\n").unwrap()
    }

    fn id(map: &HexMap, col: i64) -> CellId {
        map.cell_at(HexCoord::new(0, col)).unwrap()
    }

    #[test]
    fn test_path_reconstruction() {
        let mut map = line_map();
        let (a, b, c, d) = (id(&map, 0), id(&map, 1), id(&map, 2), id(&map, 3));
        map.cell_mut(b).predecessor = Some(a);
        map.cell_mut(c).predecessor = Some(b);
        map.cell_mut(d).predecessor = Some(c);

        assert_eq!(shortest_path(&map, d).unwrap(), vec![a, b, c, d]);
        assert_eq!(shortest_path(&map, b).unwrap(), vec![a, b]);
        assert_eq!(shortest_path(&map, a).unwrap(), vec![a]);
    }

    #[test]
    fn test_missing_predecessor() {
        let mut map = line_map();
        let (b, d) = (id(&map, 1), id(&map, 3));
        map.cell_mut(d).predecessor = Some(b);

        assert!(matches!(shortest_path(&map, d), Err(SearchError::BrokenPath(i)) if i == b.0));
    }

    #[test]
    fn test_predecessor_cycle() {
        let mut map = line_map();
        let (b, c) = (id(&map, 1), id(&map, 2));
        map.cell_mut(b).predecessor = Some(c);
        map.cell_mut(c).predecessor = Some(b);

        assert!(matches!(shortest_path(&map, c), Err(SearchError::BrokenPath(_))));
    }
}
