use crate::completer::HistoryCompleter;
use crate::history::lines::write_lines;
use crate::history::{HistoryStore, reverse_values};
use anyhow::{Result, anyhow};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::io::Write;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};
use tracing::debug;

#[derive(Debug, EnumString, EnumIter, PartialEq)]
pub enum CommandKind {
    #[strum(serialize = "add")]
    Add,
    #[strum(serialize = "remove")]
    Remove,
    #[strum(serialize = "list")]
    List,
    #[strum(serialize = "reverse")]
    Reverse,
    #[strum(serialize = "search")]
    Search,
    #[strum(serialize = "clear")]
    Clear,
    #[strum(serialize = "prompt")]
    Prompt,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Add(String),
    Remove(String),
    List,
    Reverse,
    Search(String),
    Clear,
    Prompt,
}

pub fn builtin_commands() -> Vec<String> {
    CommandKind::iter()
        .map(|k| format!("{:?}", k).to_lowercase())
        .collect()
}

pub fn parse_command(args: &[String]) -> Result<Command> {
    let (name, rest) = args.split_first().ok_or_else(|| {
        anyhow!(
            "missing command, expected one of: {}",
            builtin_commands().join(", ")
        )
    })?;

    let kind = name.parse::<CommandKind>().map_err(|_| {
        anyhow!(
            "{name}: unknown command, expected one of: {}",
            builtin_commands().join(", ")
        )
    })?;

    let arg_str = rest.join(" ");
    let no_args = |command: Command| {
        if rest.is_empty() {
            Ok(command)
        } else {
            Err(anyhow!("{name}: takes no arguments"))
        }
    };

    match kind {
        CommandKind::Add | CommandKind::Remove if arg_str.is_empty() => {
            Err(anyhow!("{name}: value missing"))
        }
        CommandKind::Add => Ok(Command::Add(arg_str)),
        CommandKind::Remove => Ok(Command::Remove(arg_str)),
        CommandKind::Search => Ok(Command::Search(arg_str)),
        CommandKind::List => no_args(Command::List),
        CommandKind::Reverse => no_args(Command::Reverse),
        CommandKind::Clear => no_args(Command::Clear),
        CommandKind::Prompt => no_args(Command::Prompt),
    }
}

pub fn execute_command<W: Write>(command: Command, store: &HistoryStore, out: &mut W) -> Result<()> {
    match command {
        Command::Add(value) => store.add(&value)?,
        Command::Remove(value) => store.remove(&value)?,
        Command::Clear => store.clear()?,
        Command::List => store.print_values(out)?,
        Command::Reverse => write_lines(out, &reverse_values(&store.values()?))?,
        Command::Search(prefix) => {
            let found = store.filtered_values(|value| value.starts_with(&prefix))?;
            write_lines(out, &reverse_values(&found))?
        }
        Command::Prompt => prompt(store, out)?,
    }
    Ok(())
}

fn prompt<W: Write>(store: &HistoryStore, out: &mut W) -> Result<()> {
    let mut editor: Editor<HistoryCompleter, DefaultHistory> = Editor::new()?;
    for value in store.values()? {
        editor.add_history_entry(value)?;
    }
    editor.set_helper(Some(HistoryCompleter::new(store.clone())));

    match editor.readline("> ") {
        Ok(line) => {
            let line = line.trim();
            if line.is_empty() {
                return Ok(());
            }
            store.add(line)?;
            write!(out, "{line}")?;
            out.flush()?;
        }
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => debug!("prompt cancelled"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
