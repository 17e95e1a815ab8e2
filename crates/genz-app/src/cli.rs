use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use genz_config::Config;
use genz_config::ui::ColorChoice;
use genz_types::SourceKind;

#[derive(Parser)]
#[command(name = "genz")]
#[command(about = "Từ điển Gen Z: tra nghĩa tiếng lóng ngay trong terminal")]
#[command(version)]
pub struct Cli {
    /// JSON config file (defaults to ./genz.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Where to load terms from
    #[arg(long, value_enum, global = true)]
    pub source: Option<SourceArg>,

    /// Endpoint for the remote source
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// JSON file for the file source
    #[arg(long, global = true)]
    pub file: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search terms and definitions, print matching cards
    Search {
        /// Search text, words are joined with a space
        #[arg(required = true)]
        query: Vec<String>,

        /// Print the cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every term in dictionary order
    List {
        #[arg(long)]
        json: bool,
    },

    /// Copy "term: definition" to the clipboard. On Linux this keeps
    /// running until something else is copied.
    Copy { term: String },

    /// Print the share message for a term
    Share { term: String },

    /// Type queries at a prompt (default)
    Interactive,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceArg {
    Bundled,
    Remote,
    File,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Bundled => SourceKind::Bundled,
            SourceArg::Remote => SourceKind::Remote,
            SourceArg::File => SourceKind::File,
        }
    }
}

impl Cli {
    /// Flags win over the config file and the environment
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(source) = self.source {
            config.source.kind = source.into();
        }
        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }
        if let Some(file) = &self.file {
            config.source.path = Some(file.clone());
            // --file alone implies the file source
            if self.source.is_none() {
                config.source.kind = SourceKind::File;
            }
        }
        if self.no_color {
            config.ui.color = ColorChoice::Never;
        }
        config
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}
