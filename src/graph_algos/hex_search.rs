use crate::config::{Heuristic, SearchConfig};
use crate::errors::{QueueError, SearchError};
use crate::map::{CellGraph, CellId};
use crate::priority_queue::PriorityQueue;
use super::shortest_path;

use log::{debug, error, info, trace};


/// Where a search currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    /// Destination reached; the length counts cells, start and destination included
    Found { path_length: u32 },
    /// Queue emptied before the destination was reached
    Exhausted,
}

/// Result of a finished search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub state: SearchState,
    pub path: Vec<CellId>, // start to destination, empty unless found
    pub expanded: usize,   // cells taken off the queue
}


/// Best-first search from the start cell to the destination cell
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Rules on top of plain A*:
/// - no-fly cells are never entered
/// - a tower cell, or any cell next to a tower, is a dead end: it is taken off
///   the queue but never expanded. The destination is checked first, so it
///   may sit next to a tower.
///
/// Every step costs 1. Finalized cells are never reopened, which gives shortest
/// paths as long as the heuristic does not overestimate.
pub struct PathSearch<'g, G: CellGraph> {
    graph: &'g mut G,
    queue: PriorityQueue<CellId>,
    heuristic: Heuristic,
    state: SearchState,
    expanded: usize,
    goal: Option<CellId>,
}

impl<'g, G: CellGraph> PathSearch<'g, G> {

    /// Clear old search state on the graph and seed the queue with the start cell
    pub fn new(graph: &'g mut G, config: &SearchConfig) -> Result<Self, SearchError> {
        graph.reset();

        let start = graph.start();
        let priority = if config.seed_with_heuristic {
            graph.heuristic(start, config.heuristic)
        } else {
            0.0
        };

        let cell = graph.cell_mut(start);
        cell.distance_from_start = 0;
        cell.enqueued = true;

        let mut queue = PriorityQueue::new();
        queue.enqueue(start, priority).map_err(contract_violation)?;

        Ok(Self {
            graph,
            queue,
            heuristic: config.heuristic,
            state: SearchState::Running,
            expanded: 0,
            goal: None,
        })
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of cells taken off the queue so far
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Cells waiting on the queue
    pub fn frontier_size(&self) -> usize {
        self.queue.size()
    }

    /// True while the cell waits on the queue
    pub fn is_queued(&self, id: CellId) -> bool {
        self.queue.contains(id)
    }

    /// Step until the destination is reached or the queue runs dry
    pub fn run(&mut self) -> Result<SearchState, SearchError> {
        while self.state == SearchState::Running {
            self.step()?;
        }
        Ok(self.state)
    }

    /// Take the most promising cell off the queue and expand it
    /// Does nothing once the search has finished
    pub fn step(&mut self) -> Result<SearchState, SearchError> {
        if self.state != SearchState::Running {
            return Ok(self.state);
        }

        if self.queue.is_empty() {
            info!("destination not reached after expanding {} cells", self.expanded);
            self.state = SearchState::Exhausted;
            return Ok(self.state);
        }

        let current = self.queue.extract_minimum().map_err(contract_violation)?;
        self.expanded += 1;
        self.graph.cell_mut(current).finalized = true;

        let cell = self.graph.cell(current);
        trace!("extracted {current} at distance {}", cell.distance_from_start);

        if cell.is_destination() {
            let path_length = cell.distance_from_start.saturating_add(1);
            info!("destination {current} reached, path length {path_length}, {} cells expanded", self.expanded);
            self.goal = Some(current);
            self.state = SearchState::Found { path_length };
        } else if cell.is_obstructed() || self.graph.has_hazard_adjacency(current) {
            trace!("{current} is a dead end");
        } else {
            self.expand(current)?;
        }

        Ok(self.state)
    }

    /// Relax every enterable, unfinalized neighbour of `current`
    fn expand(&mut self, current: CellId) -> Result<(), SearchError> {
        let from = self.graph.cell(current);
        let candidate = from.distance_from_start.saturating_add(1);
        let slots = from.neighbors;

        for neighbor in slots.into_iter().flatten() {
            let cell = self.graph.cell(neighbor);
            if cell.is_no_fly() || cell.finalized {
                continue;
            }

            // found a shorter way to this neighbour
            if candidate < cell.distance_from_start {
                let cell = self.graph.cell_mut(neighbor);
                cell.distance_from_start = candidate;
                cell.predecessor = Some(current);
            }

            let cell = self.graph.cell(neighbor);
            let estimate = cell.distance_from_start as f64 + self.graph.heuristic(neighbor, self.heuristic);

            if cell.enqueued {
                let priority = self.queue.get_priority(neighbor).map_err(contract_violation)?;
                if estimate < priority {
                    debug!("{neighbor} priority {priority} -> {estimate}");
                    self.queue.change_priority(neighbor, estimate).map_err(contract_violation)?;
                }
            } else {
                self.queue.enqueue(neighbor, estimate).map_err(contract_violation)?;
                self.graph.cell_mut(neighbor).enqueued = true;
            }
        }

        Ok(())
    }

    /// Summary of the search, with the reconstructed path when the destination was reached
    pub fn outcome(&self) -> Result<SearchOutcome, SearchError> {
        let path = match self.goal {
            Some(goal) => shortest_path(&*self.graph, goal)?,
            None => Vec::new(),
        };

        Ok(SearchOutcome {
            state: self.state,
            path,
            expanded: self.expanded,
        })
    }
}

/// The search only asks the queue about cells it has enqueued itself,
/// so any queue error here is a bug in the driver
fn contract_violation(err: QueueError) -> SearchError {
    error!("priority queue contract violated: {err}");
    SearchError::Queue(err)
}


/// Run a search over the graph from its start cell to completion
pub fn find_shortest_path<G>(graph: &mut G, config: &SearchConfig) -> Result<SearchOutcome, SearchError>
where
    G: CellGraph,
{
    let mut search = PathSearch::new(graph, config)?;
    search.run()?;
    search.outcome()
}
