// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod emoji_catalog;
mod errors;
mod file_utils;
mod rewriter;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for emojimd
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// emojimd - rewrite emoji short codes in Markdown files as inline images
///
/// Fetches the emoji short-name table from a remote endpoint, scans the `.md`
/// files directly under a directory, and replaces every recognized `:name:`
/// token with an inline image tag, rewriting the files in place.
#[derive(Parser, Debug)]
#[command(name = "emojimd")]
#[command(version)]
#[command(about = "Rewrite :shortcode: emoji tokens in Markdown files as inline images")]
#[command(long_about = "emojimd fetches an emoji short-name table and rewrites Markdown files in place,
replacing recognized :name: tokens with inline <img> tags.

EXAMPLES:
    emojimd ./posts/                        # Rewrite the .md files under ./posts/
    emojimd --log-level debug ./posts/      # Same, with debug logging
    emojimd --endpoint http://localhost:8080/emojis ./posts/
    emojimd completions bash > emojimd.bash # Generate bash completions

CONFIGURATION:
    Configuration is read from conf.json by default when it exists; otherwise
    built-in defaults are used. Command line flags override both.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory containing the Markdown documents to rewrite
    #[arg(value_name = "DIR_PATH")]
    dir_path: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Emoji table endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// User-Agent header sent with the table fetch
    #[arg(long)]
    user_agent: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "emojimd", &mut std::io::stdout());
            Ok(())
        }
        None => {
            let dir_path = cli.dir_path.clone().ok_or_else(|| {
                anyhow!("DIR_PATH is required when no subcommand is specified")
            })?;
            run_rewrite(dir_path, cli).await
        }
    }
}

async fn run_rewrite(dir_path: PathBuf, options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    // Load configuration from file when present, defaults otherwise
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        if config_path != "conf.json" {
            warn!("Config file not found at '{}', using defaults.", config_path);
        }
        Config::default()
    };

    // Override config with CLI options if provided
    if let Some(endpoint) = &options.endpoint {
        config.endpoint = endpoint.clone();
    }

    if let Some(user_agent) = &options.user_agent {
        config.user_agent = user_agent.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    // Create controller and run the pipeline; validation happens inside
    let controller = Controller::with_config(config)?;
    controller.run(dir_path).await?;

    Ok(())
}
