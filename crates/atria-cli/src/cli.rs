use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "atria",
    about = "Score Strength 360 assessments and inspect the theme catalog",
    version
)]
pub struct Cli {
    /// Config file (defaults to <config dir>/atria/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log at debug level, including skipped responses
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score an exported responses file
    Score(ScoreArgs),
    /// Inspect or validate forced-choice catalogs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// JSON object of question id to {"selectedStatement": "A" | "B"}
    pub responses: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Override the configured number of top subdomains per domain
    #[arg(long)]
    pub top: Option<usize>,
    /// Assignment the responses belong to (required for record output)
    #[arg(long)]
    pub assignment: Option<Uuid>,
    /// Mark the record as auto-submitted
    #[arg(long)]
    pub auto_submit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full talent report as JSON
    Json,
    /// Markdown summary
    Text,
    /// Row for the responses table, as JSON
    Record,
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Print every item of the configured catalog
    List,
    /// Check a catalog definition and print its statement counts
    Validate {
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a config file with the current defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config
    Show,
}
