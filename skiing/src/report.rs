//! The output sink: a printable summary of the best run.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;
use skiing_core::{ElevationGrid, Pos};
use skiing_paths::{Path, PathError};

use crate::config::OutputFormat;

/// Everything shown to the user about a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub start: Pos,
    pub end: Pos,
    pub length: usize,
    pub drop: i64,
    pub elevations: Vec<i32>,
    pub path: Vec<Pos>,
}

impl Report {
    /// Summarize `path`, looking elevations up on `grid`.
    ///
    /// Fails if the path leaves `grid`.
    pub fn new(path: &Path, grid: &ElevationGrid) -> Result<Self, PathError> {
        Ok(Self {
            start: path.start(),
            end: path.end(),
            length: path.len(),
            drop: path.drop(),
            elevations: path.elevations(grid)?,
            path: path.positions().to_vec(),
        })
    }

    /// Write the report in `format`, followed by a newline.
    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Text => writeln!(out, "{self}"),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)
            }
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.elevations {
            write!(f, " {e}")?;
        }
        writeln!(f)?;
        writeln!(f, "Length of the path = {}", self.length)?;
        write!(f, "Size of the drop = {}", self.drop)
    }
}
