//! Plain-text dumps of adjacency tables and cross-sections.
//!
//! Formats match what the plotting scripts read: one line per row, values
//! separated by single spaces, each value followed by a space.

use std::fmt::{Display, Write as _};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::GraphError;

/// Render rows as whitespace-separated lines, one line per row.
pub fn table_to_string<T: Display>(table: &[Vec<T>]) -> String {
  let mut out = String::new();
  for row in table {
    for value in row {
      // writing to a String cannot fail
      let _ = write!(out, "{value} ");
    }
    out.push('\n');
  }
  out
}

/// Render an `L × L` plane with two decimals, row `i` holding entries
/// `i·L .. i·L + L`. Values past `side²` are ignored.
///
/// Fails if `plane` holds fewer than `side²` values, reporting the first
/// missing entry.
pub fn format_cross_section(plane: &[f64], side: usize) -> Result<String, GraphError> {
  let area = side.saturating_mul(side);
  let values = plane.get(..area).ok_or(GraphError::IndexOutOfRange {
    index: plane.len(),
    len: plane.len(),
  })?;

  let mut out = String::new();
  for row in values.chunks(side.max(1)) {
    for value in row {
      let _ = write!(out, "{value:.2} ");
    }
    out.push('\n');
  }
  Ok(out)
}

/// Write `content` to `<directory>/<name>.txt`, creating the directory first.
///
/// Returns the path written.
pub fn write_txt(directory: &Path, name: &str, content: &str) -> io::Result<PathBuf> {
  fs::create_dir_all(directory)?;
  let path = directory.join(format!("{name}.txt"));
  fs::write(&path, content)?;
  Ok(path)
}

#[cfg(test)]
#[path = "io_test.rs"]
mod io_test;
