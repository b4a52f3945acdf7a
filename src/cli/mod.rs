use crate::constants::{APP_DESCRIPTION, APP_NAME, DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::journal::{Mood, PersonaId};
use clap::Parser;
use std::path::PathBuf;

/// One question. One shift. A reflective journaling companion
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Your current state (Restless, Overwhelmed, Disconnected, Grateful, Clear)
    #[arg(short = 'm', long)]
    pub mood: Option<Mood>,

    /// Inspiring voice for the question (see --list-personas)
    #[arg(short = 'p', long)]
    pub persona: Option<PersonaId>,

    /// Directory the `export` command writes reflection.txt into
    #[arg(short = 'o', long)]
    pub export_dir: Option<PathBuf>,

    /// Ask a single question, print it, and exit
    #[arg(long, conflicts_with = "list_personas")]
    pub once: bool,

    /// List the available voices and exit
    #[arg(long)]
    pub list_personas: bool,

    /// Log output format
    #[arg(long, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Print verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        <CliArgs as Parser>::parse_from(std::env::args())
    }

    /// The persona selected on the command line, `None` when not given.
    pub fn persona_or_none(&self) -> PersonaId {
        self.persona.unwrap_or(PersonaId::None)
    }

    /// Effective log level: `--verbose` forces debug.
    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}
