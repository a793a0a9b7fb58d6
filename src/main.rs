use clap::Parser;
use ddeum::core::config::{self, CliOverrides, ResolvedConfig};
use ddeum::core::state::Page;
use ddeum::sheets::{self, HttpSheetSource};
use ddeum::{html, tui};
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "ddeum", about = "Homepage sheet loader for 뜸 연기학원")]
struct Args {
    /// Load all sheets once, print the rendered containers, and exit
    #[arg(long)]
    once: bool,

    /// With --once, print the settled views as JSON instead of HTML
    #[arg(long, requires = "once")]
    json: bool,

    /// Start with admin mode on
    #[arg(long)]
    admin: bool,

    /// CSV export URL for the metrics grid
    #[arg(long)]
    metrics_url: Option<String>,

    /// CSV export URL for the name marquee
    #[arg(long)]
    names_url: Option<String>,

    /// CSV export URL for the university list
    #[arg(long)]
    universities_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to ddeum.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("ddeum.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Ignoring config file: {e}");
        eprintln!("warning: {e}, using defaults");
        config::DdeumConfig::default()
    });
    let overrides = CliOverrides {
        metrics_url: args.metrics_url,
        names_url: args.names_url,
        universities_url: args.universities_url,
        admin: args.admin,
    };
    let resolved = config::resolve(&file_config, &overrides);

    info!("Ddeum starting up (once={}, admin={})", args.once, resolved.admin);

    if args.once {
        return run_once(&resolved, args.json).await;
    }
    tui::run(resolved)
}

async fn run_once(config: &ResolvedConfig, json: bool) -> std::io::Result<()> {
    let mut page = Page::from_config(config, config.row_height_px);
    let source = HttpSheetSource::new();
    sheets::load_all(&mut page, &source).await;

    if json {
        let output = serde_json::to_string_pretty(&page.to_json()?)?;
        println!("{output}");
    } else {
        println!("{}", html::render_page(&page));
    }
    Ok(())
}
