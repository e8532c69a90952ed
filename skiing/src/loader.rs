//! Map-file loading.
//!
//! ## Format
//!
//! ```text
//! 4 4
//! 4 8 7 3
//! 2 5 9 3
//! 6 3 2 5
//! 4 4 1 6
//! ```
//!
//! The first line holds the row and column counts. Each following line
//! holds one row of whitespace-separated integer elevations. Blank lines
//! after the last row are ignored.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use skiing_core::{ElevationGrid, GridError};

/// Errors that can occur when loading a map.
#[derive(Debug)]
pub enum MapError {
    /// The file could not be read.
    Io(io::Error),
    /// The input is empty or its first line is blank.
    MissingHeader,
    /// The header is not two non-negative integers.
    BadHeader(String),
    /// A row token is not an integer. `line` is 1-based.
    BadToken { line: usize, token: String },
    /// Fewer row lines than the header declares.
    MissingRows { expected: usize, got: usize },
    /// A row holds the wrong number of cells. `line` is 1-based.
    RowLength {
        line: usize,
        expected: usize,
        got: usize,
    },
    /// Non-blank input after the declared rows. `line` is 1-based.
    TrailingData { line: usize },
    /// The parsed cells do not form a grid.
    Grid(GridError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "map: {e}"),
            Self::MissingHeader => f.write_str("map: missing \"rows cols\" header"),
            Self::BadHeader(h) => write!(f, "map: invalid header {h:?}"),
            Self::BadToken { line, token } => {
                write!(f, "map line {line}: {token:?} is not an integer")
            }
            Self::MissingRows { expected, got } => {
                write!(f, "map: header declares {expected} rows, found {got}")
            }
            Self::RowLength {
                line,
                expected,
                got,
            } => write!(f, "map line {line}: {got} cells, expected {expected}"),
            Self::TrailingData { line } => {
                write!(f, "map line {line}: unexpected data after the last row")
            }
            Self::Grid(e) => write!(f, "map: {e}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for MapError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Read and parse the map file at `path`.
pub fn load_map(path: impl AsRef<Path>) -> Result<ElevationGrid, MapError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

/// Parse a map from its text form.
pub fn parse_map(text: &str) -> Result<ElevationGrid, MapError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    let header = match lines.next() {
        Some((_, h)) if !h.trim().is_empty() => h,
        _ => return Err(MapError::MissingHeader),
    };
    let (rows, cols) = parse_header(header)?;

    let mut cells = Vec::with_capacity(rows.saturating_mul(cols).min(1 << 20));
    for got in 0..rows {
        let Some((line, text)) = lines.next() else {
            return Err(MapError::MissingRows {
                expected: rows,
                got,
            });
        };
        let before = cells.len();
        for token in text.split_whitespace() {
            let v = token.parse::<i32>().map_err(|_| MapError::BadToken {
                line,
                token: token.to_string(),
            })?;
            cells.push(v);
        }
        let n = cells.len() - before;
        if n != cols {
            return Err(MapError::RowLength {
                line,
                expected: cols,
                got: n,
            });
        }
    }

    if let Some((line, _)) = lines.find(|(_, l)| !l.trim().is_empty()) {
        return Err(MapError::TrailingData { line });
    }

    Ok(ElevationGrid::from_vec(rows, cols, cells)?)
}

fn parse_header(header: &str) -> Result<(usize, usize), MapError> {
    let bad = || MapError::BadHeader(header.trim().to_string());
    let mut tokens = header.split_whitespace();
    let rows = tokens.next().and_then(|t| t.parse().ok()).ok_or_else(bad)?;
    let cols = tokens.next().and_then(|t| t.parse().ok()).ok_or_else(bad)?;
    if tokens.next().is_some() {
        return Err(bad());
    }
    Ok((rows, cols))
}
