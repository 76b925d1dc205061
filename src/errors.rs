use thiserror::Error;


/// Failures raised by the priority queue
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("priority queue is empty")]
    EmptyQueue,
    #[error("data item not in the priority queue")]
    ItemNotFound,
    #[error("data item is already in the priority queue")]
    DuplicateItem,
}

/// Failures raised while loading or querying a hex map
#[derive(Error, Debug)]
pub enum MapError {
    #[error("map file not found: {0}")]
    FileNotFound(String),
    #[error("i/o error reading map: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid map: {0}")]
    InvalidMap(String),
    #[error("invalid element '{symbol}' at row {row}, column {col}")]
    InvalidElement { symbol: char, row: usize, col: usize },
    #[error("invalid neighbour index {0}")]
    InvalidNeighborIndex(usize),
}

#[derive(Error, Debug)]
pub enum SearchError {
    /// The search asked the queue for something it never put there
    #[error("queue contract violated: {0}")]
    Queue(#[from] QueueError),
    #[error("predecessor chain is broken at cell {0}")]
    BrokenPath(usize),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything the command line can report
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
