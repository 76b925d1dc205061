//! Shortest paths across hexagonal grid maps
//!
//! A best-first search walks a hex map from its start cell to its destination
//! cell, steering around no-fly cells and towers. The frontier lives in a
//! [`PriorityQueue`] whose priorities can be lowered in place as shorter
//! routes turn up.

pub mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod map;
pub mod priority_queue;

pub use config::{Heuristic, SearchConfig};
pub use errors::{AppError, ConfigError, MapError, QueueError, SearchError};
pub use graph_algos::{PathSearch, SearchOutcome, SearchState, find_shortest_path};
pub use map::{Cell, CellGraph, CellId, CellKind, HexMap};
pub use priority_queue::PriorityQueue;
