pub mod hex_search;
mod shortest_path;

pub use shortest_path::shortest_path;
pub use hex_search::{PathSearch, SearchOutcome, SearchState, find_shortest_path};
