use super::lines::{parse_lines, trim_to_capacity, write_lines};
use crate::error::{HistoryError, Result};
use regex::Regex;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A bounded, deduplicated list of values kept in a plain text file, oldest
/// first, one value per line.
///
/// The store holds no state besides its configuration: every operation reads
/// the file, changes the list in memory and writes it back. A missing file is
/// an empty history.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    capacity: usize,
    accept: Option<Regex>,
}

impl HistoryStore {
    /// Creates a store backed by `path` that keeps the `capacity` most recent
    /// values. `accept` restricts which values may be added; `None` accepts
    /// any non-empty single-line value.
    pub fn new(path: impl Into<PathBuf>, capacity: usize, accept: Option<Regex>) -> Self {
        Self {
            path: path.into(),
            capacity,
            accept,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `add` would accept `value`.
    pub fn accepts(&self, value: &str) -> bool {
        !value.is_empty()
            && !value.contains(['\n', '\r'])
            && self
                .accept
                .as_ref()
                .is_none_or(|pattern| pattern.is_match(value))
    }

    /// Makes `value` the most recent entry, moving it if it is already stored
    /// and evicting the oldest entries beyond capacity.
    pub fn add(&self, value: &str) -> Result<()> {
        if !self.accepts(value) {
            return Err(HistoryError::InvalidFormat {
                value: value.to_string(),
                pattern: self
                    .accept
                    .as_ref()
                    .map_or(".+", |pattern| pattern.as_str())
                    .to_string(),
            });
        }

        let mut lines = self.load(Some(value.as_bytes()))?;
        lines.push(value.as_bytes().to_vec());
        self.trim(&mut lines);
        self.persist(&lines)
    }

    /// Removes `value` if present. The file is left alone when it is not;
    /// otherwise the rewritten list is also trimmed to capacity.
    pub fn remove(&self, value: &str) -> Result<()> {
        let mut lines = self.load(None)?;

        match lines.iter().position(|line| line == value.as_bytes()) {
            Some(index) => {
                lines.remove(index);
                self.trim(&mut lines);
                self.persist(&lines)
            }
            None => {
                debug!(value, "value not in history, nothing to remove");
                Ok(())
            }
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.persist(&[])
    }

    /// The stored values, oldest first, limited to the most recent `capacity`.
    /// Bytes that are not valid UTF-8 show up as U+FFFD; the file keeps them.
    pub fn values(&self) -> Result<Vec<String>> {
        Ok(self
            .recent_lines()?
            .iter()
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect())
    }

    /// The subsequence of [`values`](Self::values) for which `predicate` holds.
    pub fn filtered_values<F>(&self, predicate: F) -> Result<Vec<String>>
    where
        F: Fn(&str) -> bool,
    {
        Ok(self
            .values()?
            .into_iter()
            .filter(|value| predicate(value))
            .collect())
    }

    /// Writes the values to `out`, one per line, with no newline after the
    /// last one.
    pub fn print_values<W: Write>(&self, out: W) -> Result<()> {
        let lines = self.recent_lines()?;
        write_lines(out, &lines).map_err(HistoryError::output)
    }

    /// [`print_values`](Self::print_values) to standard output.
    pub fn list(&self) -> Result<()> {
        self.print_values(io::stdout().lock())
    }

    fn recent_lines(&self) -> Result<Vec<Vec<u8>>> {
        let mut lines = self.load(None)?;
        trim_to_capacity(&mut lines, self.capacity);
        Ok(lines)
    }

    fn trim(&self, lines: &mut Vec<Vec<u8>>) {
        let evicted = trim_to_capacity(lines, self.capacity);
        if evicted > 0 {
            debug!(evicted, capacity = self.capacity, "evicted oldest values");
        }
    }

    fn load(&self, ignore: Option<&[u8]>) -> Result<Vec<Vec<u8>>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "history file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(HistoryError::io("open", &self.path, e)),
        };

        let lines = parse_lines(BufReader::new(file), ignore, self.accept.as_ref())
            .map_err(|e| HistoryError::io("read", &self.path, e))?;

        debug!(path = %self.path.display(), count = lines.len(), "loaded history");
        Ok(lines)
    }

    fn persist(&self, lines: &[Vec<u8>]) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| HistoryError::io("create", &self.path, e))?;
        write_lines(BufWriter::new(file), lines)
            .map_err(|e| HistoryError::io("write", &self.path, e))?;

        debug!(path = %self.path.display(), count = lines.len(), "saved history");
        Ok(())
    }
}

/// Returns `values` in reverse order, newest first for a stored list.
pub fn reverse_values(values: &[String]) -> Vec<String> {
    values.iter().rev().cloned().collect()
}
