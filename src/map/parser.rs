//! Map file loading
//!
//! ```text
//! # comment lines and blank lines are skipped
//! 3 4          <- rows cols
//! S . . .
//! . T N .
//! . . . D
//! ```
//! Symbols: `.` free, `S` start, `D` destination, `T` tower, `N` no-fly.
//! Whitespace between symbols is optional.

use super::{CellKind, HexMap};
use crate::errors::MapError;

use std::{io::ErrorKind, path::Path};
use log::debug;


impl HexMap {

    /// Read and parse a map file
    pub fn from_file(path: &Path) -> Result<Self, MapError> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MapError::FileNotFound(path.display().to_string()),
            _ => MapError::Io(e),
        })?;

        let map = Self::parse(&contents)?;
        debug!("loaded {}x{} map from {}", map.rows(), map.cols(), path.display());
        Ok(map)
    }

    /// Parse map text
    pub fn parse(contents: &str) -> Result<Self, MapError> {
        let mut lines = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let header = lines
            .next()
            .ok_or_else(|| MapError::InvalidMap("missing '<rows> <cols>' header".into()))?;
        let (rows, cols) = parse_header(header)?;

        // the header is untrusted, so storage grows with the rows actually read
        let mut kinds = Vec::new();
        for row in 0..rows {
            let line = lines
                .next()
                .ok_or_else(|| MapError::InvalidMap(format!("expected {rows} rows, found {row}")))?;

            let before = kinds.len();
            for (col, symbol) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let kind = CellKind::from_symbol(symbol)
                    .ok_or(MapError::InvalidElement { symbol, row, col })?;
                kinds.push(kind);
            }

            let found = kinds.len() - before;
            if found != cols {
                return Err(MapError::InvalidMap(format!("row {row} has {found} cells, expected {cols}")));
            }
        }

        if lines.next().is_some() {
            return Err(MapError::InvalidMap(format!("more than {rows} rows")));
        }

        HexMap::new(rows, cols, kinds)
    }
}

fn parse_header(header: &str) -> Result<(usize, usize), MapError> {
    let invalid = || MapError::InvalidMap(format!("bad header '{header}', expected '<rows> <cols>'"));

    let mut fields = header.split_whitespace().map(|f| f.parse::<usize>());
    match (fields.next(), fields.next(), fields.next()) {
        (Some(Ok(rows)), Some(Ok(cols)), None) if rows > 0 && cols > 0 => {
            rows.checked_mul(cols).ok_or_else(invalid)?;
            Ok((rows, cols))
        }
        _ => Err(invalid()),
    }
}
