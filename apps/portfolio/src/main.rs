use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio::actions::{ConsoleNotifier, SystemClipboard};
use portfolio::config::Config;
use portfolio::render::Document;
use portfolio::PortfolioView;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Render the résumé page and copy its contact email", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page (HTML by default)
    Render {
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Copy the contact email to the system clipboard
    CopyEmail,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the rendered page.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let profile = config.load_profile().context("Failed to load profile")?;
    let date_style = config.date_style()?;
    info!(
        "Portfolio v{} for '{}' (date format {})",
        env!("CARGO_PKG_VERSION"),
        profile.name,
        date_style.format_str()
    );

    let view = PortfolioView::new(
        Arc::new(SystemClipboard::detect()),
        Arc::new(ConsoleNotifier),
    )
    .with_profile(profile)
    .with_date_style(date_style);

    match cli.command {
        Commands::Render { format, out } => {
            let output = serialize(&view.render(), format)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, output)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote {}", path.display());
                }
                None => print!("{output}"),
            }
        }
        // Failure is reported through the notification, not the exit code.
        Commands::CopyEmail => {
            view.on_copy_email().await;
        }
    }

    Ok(())
}

fn serialize(document: &Document, format: Format) -> Result<String> {
    Ok(match format {
        Format::Html => document.to_html(),
        Format::Text => document.to_text(),
        Format::Json => serde_json::to_string_pretty(document)? + "\n",
    })
}
