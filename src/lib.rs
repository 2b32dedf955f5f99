pub mod error {
    #[allow(clippy::module_inception)]
    mod error;
    pub use error::{HistoryError, Result};
}

pub mod history {
    #[allow(clippy::module_inception)]
    mod history;
    pub(crate) mod lines;
    pub use history::{HistoryStore, reverse_values};
}

pub mod config {
    #[allow(clippy::module_inception)]
    mod config;
    pub use config::{Config, DEFAULT_KEEP, default_history_path, parse_args};
}

pub mod commands {
    #[allow(clippy::module_inception)]
    mod commands;
    pub use commands::{Command, CommandKind, builtin_commands, execute_command, parse_command};
}

pub mod completer {
    #[allow(clippy::module_inception)]
    mod completer;
    pub use completer::HistoryCompleter;
}

pub mod logger {
    #[allow(clippy::module_inception)]
    mod logger;
    pub use logger::init_logging;
}

pub use error::HistoryError;
pub use history::{HistoryStore, reverse_values};
