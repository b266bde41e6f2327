use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use menumaker::commands;
use menumaker::config;
use menumaker::data_provider::{DefaultMenuProvider, MenuProvider};
use menumaker::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "menumaker")]
#[command(about = "Restaurant menu browser", long_about = "Restaurant menu browser\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Menu location: http(s) URL, file:// URL or path (overrides config)
    #[arg(short, long, global = true)]
    source: Option<String>,

    /// Id of the container element the widget binds to (overrides config)
    #[arg(short, long, global = true)]
    container: Option<String>,

    /// Serve the built-in sample menu instead of fetching
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the menu's sections
    Sections,
    /// Display the dishes of one section
    Show {
        /// Section id (e.g., app)
        section: String,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("source: {}", cfg.source);
    println!("container_id: {}", cfg.container_id);
    println!("request_timeout_secs: {}", cfg.request_timeout().as_secs());
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("price_fg: {:?}", cfg.theme.price_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Apply --source and --container on top of the config file
fn apply_overrides(cli: &Cli, config: &mut config::Config) {
    if let Some(source) = &cli.source {
        config.source = source.clone();
    }
    if let Some(container) = &cli.container {
        config.container_id = container.clone();
    }
}

fn create_provider(cli: &Cli, config: &config::Config) -> anyhow::Result<Arc<dyn MenuProvider>> {
    #[cfg(feature = "development")]
    if cli.mock {
        tracing::info!("Using the built-in sample menu");
        return Ok(Arc::new(menumaker::dev::MockProvider::new()));
    }
    #[cfg(not(feature = "development"))]
    let _ = cli;

    let provider = DefaultMenuProvider::new(config.request_timeout())?;
    Ok(Arc::new(provider))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    provider: &dyn MenuProvider,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Sections => {
            commands::sections::run(provider, &config.container_id, &config.source).await
        }
        Commands::Show { section } => {
            commands::show::run(provider, &config.container_id, &config.source, &section).await
        }
    }
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    apply_overrides(&cli, &mut config);

    if let Some(Commands::Config) = cli.command {
        handle_config_command(&config);
        return;
    }

    let provider = match create_provider(&cli, &config) {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!("Failed to create menu provider: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    // If no subcommand, run TUI
    let Some(command) = cli.command else {
        if let Err(e) = tui::run(config, provider).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(provider.as_ref(), &config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
