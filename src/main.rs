//! hexroute - find the shortest route across a hex map
//!
//! ```text
//! hexroute <map-file> [--config <file>] [--show-path]
//! ```
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `hexroute=info`).

use hexroute::{
    AppError, CellGraph, HexMap, MapError, SearchConfig, SearchError, SearchState,
    find_shortest_path,
};

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use log::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "hexroute.toml";

/// Parsed command line
#[derive(Debug, PartialEq)]
struct Options {
    map_path: PathBuf,
    config_path: Option<PathBuf>,
    show_path: bool,
}

fn parse_args(args: &[String]) -> Result<Options, AppError> {
    let mut map_path = None;
    let mut config_path = None;
    let mut show_path = false;

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| AppError::InvalidArgument("--config needs a file".into()))?;
                config_path = Some(PathBuf::from(path));
            }
            "--show-path" => show_path = true,
            flag if flag.starts_with("--") => {
                return Err(AppError::InvalidArgument(format!("unknown option {flag}")));
            }
            path if map_path.is_none() => map_path = Some(PathBuf::from(path)),
            extra => return Err(AppError::InvalidArgument(format!("unexpected argument {extra}"))),
        }
    }

    let map_path = map_path.ok_or_else(|| AppError::InvalidArgument("no map file given".into()))?;
    Ok(Options { map_path, config_path, show_path })
}

/// Explicit --config, else hexroute.toml when present, else defaults
fn load_config(options: &Options) -> Result<SearchConfig, AppError> {
    let config = match &options.config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            SearchConfig::load(path)?
        }
        None if Path::new(DEFAULT_CONFIG).exists() => {
            info!("Loading configuration from {DEFAULT_CONFIG}");
            SearchConfig::load(Path::new(DEFAULT_CONFIG))?
        }
        None => SearchConfig::default(),
    };
    Ok(config)
}

fn run(args: &[String]) -> Result<(), AppError> {
    let options = parse_args(args)?;
    let config = load_config(&options)?;

    let mut map = HexMap::from_file(&options.map_path)?;
    let outcome = find_shortest_path(&mut map, &config)?;

    match outcome.state {
        SearchState::Found { path_length } => {
            println!("The destination was reached using a path of length {path_length} cells.");
            if options.show_path {
                let route: Vec<String> = outcome.path
                    .iter()
                    .map(|&id| {
                        let coord = map.cell(id).coord;
                        format!("({}, {})", coord.row, coord.col)
                    })
                    .collect();
                println!("{}", route.join(" -> "));
                print!("{}", map.render(&outcome.path));
            }
        }
        _ => println!("The destination was not reached."),
    }

    Ok(())
}

/// One line per failure kind
fn report(err: &AppError) -> &'static str {
    match err {
        AppError::InvalidArgument(_) => "The argument provided is not valid.",
        AppError::Map(MapError::InvalidElement { .. }) => "An element provided is deemed invalid.",
        AppError::Map(MapError::InvalidNeighborIndex(_)) => "The index of a neighbour cell is invalid.",
        AppError::Map(MapError::InvalidMap(_)) => "The map provided is invalid.",
        AppError::Map(MapError::FileNotFound(_)) => "File not found.",
        AppError::Map(MapError::Io(_)) => "An input/output caused an error.",
        AppError::Config(_) => "The configuration provided is invalid.",
        AppError::Search(SearchError::Queue(_)) => "The priority queue was used incorrectly.",
        AppError::Search(SearchError::BrokenPath(_)) => "The path could not be reconstructed.",
    }
}

fn exit_code(err: &AppError) -> u8 {
    match err {
        AppError::InvalidArgument(_) => 2,
        AppError::Map(_) | AppError::Config(_) => 3,
        AppError::Search(_) => 4,
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hexroute=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            println!("{}", report(&e));
            ExitCode::from(exit_code(&e))
        }
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(&args(&["map.txt", "--show-path", "--config", "c.toml"])).unwrap();
        assert_eq!(options, Options {
            map_path: PathBuf::from("map.txt"),
            config_path: Some(PathBuf::from("c.toml")),
            show_path: true,
        });
    }

    #[test]
    fn test_bad_args() {
        let cases: [&[&str]; 4] = [&[], &["--config"], &["a.txt", "b.txt"], &["a.txt", "--fast"]];
        for bad in cases {
            let result = parse_args(&args(bad));
            assert!(matches!(result, Err(AppError::InvalidArgument(_))), "{bad:?}");
        }
    }

    #[test]
    fn test_missing_map_file_report() {
        let err = run(&args(&["no/such/map.txt"])).unwrap_err();
        assert_eq!(report(&err), "File not found.");
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn test_bundled_maps() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("maps");
        for (name, reached) in [("open.txt", true), ("towers.txt", true), ("walled.txt", false)] {
            let mut map = HexMap::from_file(&dir.join(name)).unwrap();
            let outcome = find_shortest_path(&mut map, &SearchConfig::default()).unwrap();
            assert_eq!(matches!(outcome.state, SearchState::Found { .. }), reached, "{name}");
        }
    }
}
