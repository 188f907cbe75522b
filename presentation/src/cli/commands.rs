//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for oneword_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for oneword
#[derive(Parser, Debug)]
#[command(name = "oneword")]
#[command(author, version, about = "Single-word AI answers and number-theory helpers")]
#[command(long_about = r#"
oneword asks a generative-AI backend (Google Gemini) for a one-word answer
and bundles a few elementary number-theory helpers.

The API key is read from $GEMINI_API_KEY unless configured otherwise.

Configuration files are loaded from (in priority order):
1. ONEWORD_* environment variables (e.g. ONEWORD_GEMINI__MODEL)
2. --config <path>     Explicit config file
3. ./oneword.toml      Project-level config
4. ~/.config/oneword/config.toml   Global config

Example:
  oneword ask "What is the capital of France?"
  oneword fibonacci 10
  oneword primes 2 4 7 9 11
  oneword hcf 12 18 24
  oneword -o json lcm 4 6 8
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and the effective config, then exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask the AI backend a question and print a single-word answer
    Ask {
        /// The question to ask
        question: String,
    },

    /// Print the first N Fibonacci numbers
    #[command(alias = "fib")]
    Fibonacci {
        /// Number of terms
        n: u32,
    },

    /// Keep only the prime numbers from a list
    Primes {
        /// Integers to filter
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Highest common factor of positive integers
    #[command(alias = "gcd")]
    Hcf {
        /// Positive integers
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Least common multiple of positive integers
    Lcm {
        /// Positive integers
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
}
