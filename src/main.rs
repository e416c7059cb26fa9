//! sharepop - a share popup for the terminal

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use sharepop::App;
use sharepop::config::Config;
use sharepop::page::{Page, Selector};
use sharepop::popup::STATE_ATTRIBUTE;
use std::path::{Path, PathBuf};

/// A share popup for the terminal
#[derive(Parser)]
#[command(name = "sharepop")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Activate the share button without a terminal UI and print the final state
    Toggle {
        /// Raw `data-state` value the popup starts with
        #[arg(long)]
        initial: Option<String>,
        /// Number of activations
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Check that the configured selectors bind against the share page
    Check,
    /// Print the effective configuration
    Config {
        /// Print the config file path instead
        #[arg(long)]
        path: bool,
    },
}

fn init_logging() {
    // Log to /tmp/sharepop.log - tail with: tail -f /tmp/sharepop.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never("/tmp", "sharepop.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Toggle { initial, times }) => cmd_toggle(config, initial.as_deref(), times),
        Some(Commands::Check) => cmd_check(config),
        Some(Commands::Config { path }) => cmd_config(&config, cli.config.as_deref(), path),
        None => {
            let app = App::with_share_page(config).context("Failed to set up share popup")?;
            sharepop::tui::run(app)
        }
    }
}

fn cmd_toggle(config: Config, initial: Option<&str>, times: u32) -> Result<()> {
    let mut page = Page::share_page(&config.button_label, &config.popup_title);
    if let Some(raw) = initial
        && let Ok(selector) = config.popup_selector.parse::<Selector>()
        && let Some(popup) = page.query_selector(&selector)
    {
        page.set_attribute(popup, STATE_ATTRIBUTE, raw);
    }

    let mut app = App::new(config, page).context("Failed to set up share popup")?;
    for _ in 0..times {
        app.activate();
    }

    let state = app
        .page
        .attribute(app.popup(), STATE_ATTRIBUTE)
        .unwrap_or_default();
    println!("{state}");
    Ok(())
}

fn cmd_check(config: Config) -> Result<()> {
    let trigger = config.trigger_selector.clone();
    let popup = config.popup_selector.clone();
    App::with_share_page(config).context("Share popup cannot be bound")?;
    println!("ok: trigger {trigger} and popup {popup} bound");
    Ok(())
}

fn cmd_config(config: &Config, explicit: Option<&Path>, show_path: bool) -> Result<()> {
    if show_path {
        let path = explicit.map_or_else(Config::default_path, Path::to_path_buf);
        println!("{}", path.display());
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(config).context("Failed to serialize config")?
        );
    }
    Ok(())
}
