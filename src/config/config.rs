use crate::history::HistoryStore;
use anyhow::{Context, Result, anyhow};
use regex::Regex;
use std::path::PathBuf;

/// Number of values kept when `--keep` is not given.
pub const DEFAULT_KEEP: usize = 10;

const HISTORY_FILE_NAME: &str = ".histkeep_history";

#[derive(Debug, Clone)]
pub struct Config {
    pub file: PathBuf,
    pub keep: usize,
    pub format: Option<Regex>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: default_history_path(),
            keep: DEFAULT_KEEP,
            format: None,
        }
    }
}

impl Config {
    pub fn store(&self) -> HistoryStore {
        HistoryStore::new(&self.file, self.keep, self.format.clone())
    }
}

/// `~/.histkeep_history`, or the same name in the current directory when no
/// home directory is known.
pub fn default_history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HISTORY_FILE_NAME)
}

/// Splits argv (without the program name) into options and the command words.
///
/// Options are only recognised before the command name, so values such as
/// `--keep` can still be added after it. `--` ends option parsing.
pub fn parse_args<I>(args: I) -> Result<(Config, Vec<String>)>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut rest = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-f" | "--file" => {
                let path = iter.next().ok_or_else(|| anyhow!("{arg}: path missing"))?;
                config.file = PathBuf::from(path);
            }
            "-n" | "--keep" => {
                let keep = iter.next().ok_or_else(|| anyhow!("{arg}: count missing"))?;
                config.keep = keep
                    .parse()
                    .with_context(|| format!("{arg}: invalid count `{keep}`"))?;
            }
            "-e" | "--format" => {
                let pattern = iter.next().ok_or_else(|| anyhow!("{arg}: pattern missing"))?;
                let format = Regex::new(&pattern)
                    .with_context(|| format!("{arg}: invalid pattern `{pattern}`"))?;
                config.format = Some(format);
            }
            "--" => {
                rest.extend(iter);
                break;
            }
            _ => {
                rest.push(arg);
                rest.extend(iter);
                break;
            }
        }
    }

    Ok((config, rest))
}
