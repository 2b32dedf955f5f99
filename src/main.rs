use anyhow::Result;
use histkeep::commands::{execute_command, parse_command};
use histkeep::config::parse_args;
use histkeep::logger::init_logging;
use std::{env, io, process};
use tracing::debug;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("histkeep: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let (config, args) = parse_args(env::args().skip(1))?;
    let command = parse_command(&args)?;
    debug!(?command, file = %config.file.display(), keep = config.keep, "running command");

    let store = config.store();
    let mut stdout = io::stdout().lock();
    execute_command(command, &store, &mut stdout)
}
