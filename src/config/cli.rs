use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "pcs-utils")]
#[command(about = "Parsing and validation helpers for procyclingstats.com data")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// `30 July 2022` -> `2022-07-30`
    ConvertDate { date: String },

    /// `M:SS` / `MM:SS` -> `H:MM:SS`
    FormatTime { time: String },

    /// Add two times, result as `H:MM:SS`
    AddTime { time1: String, time2: String },

    /// Find the first `DD/MM` or `DD-MM` in a text
    DayMonth { text: String },

    /// Select table fields out of a comma separated list of available fields
    Fields {
        #[arg(value_delimiter = ',')]
        available: Vec<String>,

        #[arg(short, long, value_delimiter = ',')]
        requested: Vec<String>,
    },

    /// Check a URL against a sequence of URL parts (e.g. `url_str year stage`)
    MatchUrl {
        url: String,

        #[arg(required = true)]
        parts: Vec<String>,
    },

    /// Validate a raw field value against a TOML rule file
    Validate {
        #[arg(short, long, default_value = "pcs-rules.toml")]
        rules: String,

        #[arg(short, long)]
        field: String,

        /// Omit to validate a missing value
        value: Option<String>,
    },
}
