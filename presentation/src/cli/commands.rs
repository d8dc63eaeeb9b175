//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for quiz views
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Questions with highlighted options, then the results breakdown
    Full,
    /// Progress and score only
    Summary,
    /// Session snapshot as JSON
    Json,
}

impl From<OutputFormat> for learnpal_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for learnpal
#[derive(Parser, Debug)]
#[command(name = "learnpal")]
#[command(author, version, about = "Generate a multiple-choice quiz on any topic and take it")]
#[command(long_about = r#"
learnpal asks a quiz generation service for multiple-choice questions on a
topic, then lets you answer them one by one and shows your score.

In the interactive session:
  <topic>          Generate a new quiz (replaces the current one)
  <n> <key>        Answer question n with option key, e.g. "2 B"
  /results         Show the results breakdown
  /help            List all commands

Configuration files are loaded from (in priority order):
1. LEARNPAL_* environment variables (e.g. LEARNPAL_SERVICE__ENDPOINT)
2. --config <path>     Explicit config file
3. ./learnpal.toml     Project-level config
4. ~/.config/learnpal/config.toml   Global config

Example:
  learnpal "photosynthesis"
  learnpal --once -o json "the French revolution"
  learnpal --endpoint http://localhost:8000/api/quiz
"#)]
pub struct Cli {
    /// Topic to generate a quiz for (starts the session with it)
    pub topic: Option<String>,

    /// URL of the quiz generation service
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append session events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Fetch the quiz for TOPIC, print it and exit
    #[arg(long, requires = "topic")]
    pub once: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_topic_and_flags() {
        let cli = Cli::try_parse_from([
            "learnpal",
            "--once",
            "-o",
            "json",
            "-vv",
            "--endpoint",
            "http://localhost:9000/quiz",
            "cell biology",
        ])
        .unwrap();

        assert_eq!(cli.topic.as_deref(), Some("cell biology"));
        assert!(cli.once);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000/quiz"));
    }

    #[test]
    fn test_defaults_leave_overrides_unset() {
        let cli = Cli::try_parse_from(["learnpal"]).unwrap();
        assert!(cli.topic.is_none());
        assert!(cli.output.is_none());
        assert!(cli.endpoint.is_none());
        assert!(!cli.quiet);
        assert!(!cli.once);
    }

    #[test]
    fn test_once_requires_topic() {
        assert!(Cli::try_parse_from(["learnpal", "--once"]).is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        let format: learnpal_domain::OutputFormat = OutputFormat::Summary.into();
        assert_eq!(format, learnpal_domain::OutputFormat::Summary);
    }
}
