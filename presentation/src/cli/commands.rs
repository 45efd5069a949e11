//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for orderbot
#[derive(Parser, Debug)]
#[command(name = "orderbot")]
#[command(author, version, about = "OrderBot - chat with a pizza restaurant's order-taking assistant")]
#[command(long_about = r#"
OrderBot greets you, collects your order, asks whether it is pickup or
delivery, summarizes the order and asks for an address when needed.

Without a message, an interactive chat session starts. With a message,
one exchange runs and the reply is printed.

The provider credential is read from the environment variable named by
provider.api_key_env (default GROQ_API_KEY). A .env file is honoured.

Configuration files are loaded from (in priority order):
1. ORDERBOT_* env vars   e.g. ORDERBOT_PROVIDER__MODEL
2. --config <path>       Explicit config file
3. ./orderbot.toml       Project-level config
4. ~/.config/orderbot/config.toml   Global config

Example:
  orderbot
  orderbot "I'd like a large pepperoni pizza"
  orderbot -m llama-3.1-8b-instant --log-conversation orders.jsonl
"#)]
pub struct Cli {
    /// Send a single message and print the reply (omit for interactive chat)
    pub message: Option<String>,

    /// Model to chat with (overrides provider.model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and effective values, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Append conversation events to a JSONL file
    #[arg(long, value_name = "PATH")]
    pub log_conversation: Option<PathBuf>,

    /// Write diagnostic logs to daily files in this directory instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
