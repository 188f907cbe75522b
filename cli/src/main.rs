//! CLI entrypoint for oneword
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use oneword_application::{AnswerConfig, FetchAnswerError, FetchAnswerUseCase, LlmGateway};
use oneword_domain::math::{calculate_hcf, calculate_lcm, filter_primes, generate_fibonacci};
use oneword_domain::{MathError, OutputFormat};
use oneword_infrastructure::{ConfigLoader, EnvCredentialSource, FileConfig, GeminiLlmGateway};
use oneword_presentation::{
    Cli, Command, CommandReport, ConsoleFormatter, ErrorReport, SpinnerProgress,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
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
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{line}");
        }
        println!();
        println!("{}", config.to_redacted_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let issues = config.validate();
    if !issues.is_empty() {
        let details = issues
            .iter()
            .map(|issue| format!("  - {issue}"))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("Invalid configuration:\n{details}");
    }

    ConsoleFormatter::set_color(config.output.color);

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let Some(command) = cli.command else {
        bail!("No command given. Run `oneword --help` for usage.");
    };

    info!("Starting oneword");
    debug!(?format, "Resolved output format");

    let outcome = match command {
        Command::Ask { question } => {
            let show_spinner = !cli.quiet && format == OutputFormat::Text;
            ask(&config, question, show_spinner)
                .await
                .map_err(|err| ErrorReport::new(err.kind().as_str(), err.to_string()))
        }
        Command::Fibonacci { n } => generate_fibonacci(n)
            .map(|terms| CommandReport::Fibonacci { n, terms })
            .map_err(math_error_report),
        Command::Primes { numbers } => {
            let primes = filter_primes(&numbers);
            Ok(CommandReport::Primes {
                input: numbers,
                primes,
            })
        }
        Command::Hcf { numbers } => calculate_hcf(&numbers)
            .map(|hcf| CommandReport::Hcf {
                input: numbers,
                hcf,
            })
            .map_err(math_error_report),
        Command::Lcm { numbers } => calculate_lcm(&numbers)
            .map(|lcm| CommandReport::Lcm {
                input: numbers,
                lcm,
            })
            .map_err(math_error_report),
    };

    // Output results
    match outcome {
        Ok(report) => {
            let output = match format {
                OutputFormat::Text => ConsoleFormatter::format(&report),
                OutputFormat::Json => ConsoleFormatter::format_json(&report),
            };
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            let output = match format {
                OutputFormat::Text => ConsoleFormatter::format_error(&error),
                OutputFormat::Json => ConsoleFormatter::format_error_json(&error),
            };
            eprintln!("{output}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn ask(
    config: &FileConfig,
    question: String,
    show_spinner: bool,
) -> Result<CommandReport, FetchAnswerError> {
    // === Dependency Injection ===
    let gateway: Arc<dyn LlmGateway> = Arc::new(GeminiLlmGateway::from_config(&config.gemini)?);
    let credentials = Arc::new(EnvCredentialSource::from_config(&config.gemini));

    let use_case = FetchAnswerUseCase::new(gateway, credentials)
        .with_config(AnswerConfig::new(config.gemini.generation_params()));

    let answer = if show_spinner {
        let progress = SpinnerProgress::new();
        use_case.execute_with_progress(&question, &progress).await?
    } else {
        use_case.execute(&question).await?
    };

    Ok(CommandReport::Ask { question, answer })
}

fn math_error_report(err: MathError) -> ErrorReport {
    let kind = match &err {
        MathError::EmptyInput | MathError::NonPositive(_) => "invalid_input",
        MathError::Overflow { .. } => "overflow",
    };
    ErrorReport::new(kind, err.to_string())
}
