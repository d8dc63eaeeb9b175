//! CLI entrypoint for learnpal
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use learnpal_application::{
    FetchProgressNotifier, NoProgress, QuizEventLogger, QuizOrchestrator,
};
use learnpal_domain::QuizStatus;
use learnpal_infrastructure::{ConfigLoader, FileConfig, HttpQuizGenerator, JsonlQuizLogger};
use learnpal_presentation::{
    Cli, OutputConfig, ProgressReporter, QuizFormatter, QuizRepl, ReplConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags take precedence over every config source
    if let Some(endpoint) = &cli.endpoint {
        config.service.endpoint = endpoint.clone();
    }
    if let Err(e) = config.validate() {
        eprintln!("Warning: {}", e);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting learnpal against {}", config.service.endpoint);

    // === Dependency Injection ===
    let generator = Arc::new(HttpQuizGenerator::new(
        config.service.endpoint.clone(),
        Some(Duration::from_secs(config.service.timeout_secs)),
    )?);

    let mut orchestrator = QuizOrchestrator::new(generator);

    let event_log = cli
        .log_file
        .clone()
        .or_else(|| config.logging.event_log.as_ref().map(PathBuf::from));
    if let Some(path) = event_log {
        match JsonlQuizLogger::open(&path) {
            Some(logger) => {
                info!("Session events logged to {}", logger.path().display());
                let logger: Arc<dyn QuizEventLogger> = Arc::new(logger);
                orchestrator = orchestrator.with_event_logger(logger);
            }
            None => warn!("Continuing without session event log"),
        }
    }

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
    };

    // Single quiz mode: fetch, print, exit
    if cli.once {
        let topic = cli.topic.as_deref().unwrap_or_default();
        let progress: Box<dyn FetchProgressNotifier> = if cli.quiet {
            Box::new(NoProgress)
        } else {
            Box::new(ProgressReporter::new())
        };
        orchestrator
            .submit_topic_with_progress(topic, progress.as_ref())
            .await;

        let snapshot = orchestrator.snapshot();
        println!("{}", QuizFormatter::render(output.format, &snapshot, None));

        if snapshot.status == QuizStatus::Error {
            std::process::exit(1);
        }
        return Ok(());
    }

    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config.repl.history_file.as_ref().map(PathBuf::from),
    };

    QuizRepl::new(orchestrator)
        .with_output(output)
        .with_repl_config(repl_config)
        .run(cli.topic.as_deref())
        .await?;

    Ok(())
}
