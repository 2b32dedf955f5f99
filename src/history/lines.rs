use regex::Regex;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};

/// Reads newline separated lines as raw bytes, skipping blank lines, lines
/// rejected by `accept` and every line equal to `ignore`.
///
/// Lines are kept byte for byte. `accept` sees non UTF-8 bytes as U+FFFD. A
/// line that appears more than once keeps only its most recent (last)
/// position.
pub(crate) fn parse_lines<R: BufRead>(
    mut reader: R,
    ignore: Option<&[u8]>,
    accept: Option<&Regex>,
) -> io::Result<Vec<Vec<u8>>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let mut line = buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }

        if line.is_empty() || ignore == Some(line) {
            continue;
        }
        if accept.is_some_and(|pattern| !pattern.is_match(&String::from_utf8_lossy(line))) {
            continue;
        }
        lines.push(line.to_vec());
    }

    Ok(dedup_keep_last(lines))
}

fn dedup_keep_last(lines: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
    let mut seen = HashSet::new();
    let mut kept: Vec<Vec<u8>> = lines
        .into_iter()
        .rev()
        .filter(|line| seen.insert(line.clone()))
        .collect();
    kept.reverse();
    kept
}

/// Writes `lines` separated by `\n`, without a terminator after the last one.
pub(crate) fn write_lines<W, L>(mut writer: W, lines: &[L]) -> io::Result<()>
where
    W: Write,
    L: AsRef<[u8]>,
{
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        writer.write_all(line.as_ref())?;
    }
    writer.flush()
}

/// Drops entries from the front until at most `capacity` remain. Returns the
/// number of entries dropped.
pub(crate) fn trim_to_capacity<T>(values: &mut Vec<T>, capacity: usize) -> usize {
    let excess = values.len().saturating_sub(capacity);
    values.drain(..excess);
    excess
}
