//! CLI entrypoint for orderbot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use orderbot_application::{ConversationLogger, TakeOrderUseCase};
use orderbot_domain::Model;
use orderbot_infrastructure::{
    ConfigError, ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiCompatibleGateway,
    resolve_api_key,
};
use orderbot_presentation::{ChatFormatter, Cli, OrderRepl, ReplConfig, ReplError};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Values in .env win over the inherited environment.
    let _ = dotenvy::dotenv_override();

    let cli = Cli::parse();
    let _log_guard = init_tracing(&cli)?;

    info!("Starting orderbot");

    // === Load Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    // CLI flags override config
    apply_cli_overrides(&mut config, &cli);
    let config = ConfigLoader::validated(config).context("Invalid command-line options")?;

    if cli.show_config {
        show_config(&cli, &config)?;
        return Ok(ExitCode::SUCCESS);
    }

    // === Startup precondition ===
    let api_key = match resolve_api_key(&config.provider) {
        Ok(key) => key,
        Err(e @ ConfigError::MissingCredential { .. }) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    // === Dependency Injection ===
    let gateway = Arc::new(
        OpenAiCompatibleGateway::new(&config.provider, api_key)
            .context("Failed to create the completion client")?,
    );

    let params = config.order_params();
    if let Model::Custom(name) = &params.model {
        info!(model = %name, "Using a model outside the known list");
    }

    let mut use_case = TakeOrderUseCase::new(gateway, params);
    if let Some(logger) = conversation_logger(&config) {
        use_case = use_case.with_conversation_logger(logger);
    }

    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress,
        redraw: config.repl.redraw,
        history_file: config.repl.history_file.as_ref().map(PathBuf::from),
    };
    let mut repl = OrderRepl::new(use_case)
        .with_config(repl_config)
        .with_formatter(ChatFormatter::new(config.output.color));

    // One-shot mode
    if let Some(message) = &cli.message {
        let reply = repl
            .send_once(message)
            .await
            .context("OrderBot could not answer")?;
        println!("{}", reply);
        return Ok(ExitCode::SUCCESS);
    }

    match repl.run().await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Already reported to the user by the REPL
        Err(ReplError::Session(e)) => {
            warn!("Session ended: {}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.provider.model = model.clone();
    }
    if cli.quiet {
        config.repl.show_progress = false;
    }
    if cli.no_color {
        config.output.color = false;
    }
    if let Some(path) = &cli.log_conversation {
        config.logging.conversation_file = Some(path.display().to_string());
    }
}

/// Install the tracing subscriber. With `--log-dir` logs go to a daily
/// rolling file; the returned guard must live until exit.
fn init_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "orderbot.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn conversation_logger(config: &FileConfig) -> Option<Arc<dyn ConversationLogger>> {
    let path = config.logging.conversation_file.as_deref()?;
    match JsonlConversationLogger::new(path) {
        Some(logger) => {
            info!(path = %logger.path().display(), "Conversation log enabled");
            Some(Arc::new(logger))
        }
        None => {
            warn!("Conversation log disabled: could not open {}", path);
            None
        }
    }
}

fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    if cli.no_config {
        println!("Configuration files disabled (--no-config); using built-in defaults.");
    } else {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_deref()));
    }
    println!();
    println!("Effective configuration:");
    let rendered =
        toml::to_string_pretty(&config.redacted()).context("Failed to render configuration")?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderbot_infrastructure::ConfigValidationError;

    fn overridden(args: &[&str]) -> FileConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut config = ConfigLoader::load_defaults();
        apply_cli_overrides(&mut config, &cli);
        config
    }

    #[test]
    fn test_overrides_apply() {
        let config = overridden(&[
            "orderbot",
            "-m",
            "llama-3.1-8b-instant",
            "--quiet",
            "--no-color",
            "--log-conversation",
            "orders.jsonl",
        ]);
        assert_eq!(config.provider.model, "llama-3.1-8b-instant");
        assert!(!config.repl.show_progress);
        assert!(!config.output.color);
        assert_eq!(
            config.logging.conversation_file.as_deref(),
            Some("orders.jsonl")
        );
        assert!(ConfigLoader::validated(config).is_ok());
    }

    #[test]
    fn test_blank_model_override_fails_validation() {
        for model in ["", "   "] {
            let config = overridden(&["orderbot", "-m", model]);
            let err = ConfigLoader::validated(config).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Invalid(ref issues) if issues == &[ConfigValidationError::EmptyModel]
            ));
        }
    }
}
