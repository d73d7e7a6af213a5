//! Games Dash
//!
//! Loads the games dataset and serves the interactive dashboard.
//!
//! Run with: cargo run -- serve --data-dir ./data

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use games_dash::api::{serve, ApiConfig, AppState};
use games_dash::config::{generate_default_config, Config, LoggingConfig};
use games_dash::dataset::{Dataset, DatasetLoader, LoadReport};

#[derive(Parser)]
#[command(name = "games-dash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard over a video-game sales and ratings dataset")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: searched in standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing the dataset CSV
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Host to bind to
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, global = true)]
    pub port: Option<u16>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard (default)
    Serve,

    /// Load the dataset and print what was kept
    Summary,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = &cli.command {
        return write_default_config(output.as_ref());
    }

    // Config loading logs before the configured subscriber exists
    let config = tracing::subscriber::with_default(bootstrap_subscriber(), || load_config(&cli))?;
    init_tracing(&config.logging);

    match cli.command {
        Some(Commands::Summary) => {
            let (dataset, report) = load_dataset(&config)?;
            print_summary(&dataset, &report);
            Ok(())
        }
        _ => run_server(config).await,
    }
}

/// Config file (explicit or default locations), then CLI overrides
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };

    if let Some(dir) = &cli.data_dir {
        config.data.dir = dir.clone();
    }
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    Ok(config)
}

/// Stderr subscriber used only while the config itself is being read
fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("games_dash=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("games_dash={},tower_http=info", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn load_dataset(config: &Config) -> anyhow::Result<(Dataset, LoadReport)> {
    let path = config.data.csv_path();
    tracing::info!("Loading dataset from {:?}", path);

    let (dataset, report) = DatasetLoader::new()
        .with_min_year(config.data.min_year)
        .load(&path)
        .with_context(|| format!("loading dataset from {:?}", path))?;

    tracing::info!("Dataset loaded: {}", report);
    if dataset.is_empty() {
        tracing::warn!("No rows survived cleaning; the dashboard will be empty");
    }

    Ok((dataset, report))
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting Games Dash v{}", env!("CARGO_PKG_VERSION"));

    let (dataset, _) = load_dataset(&config)?;
    let domains = dataset.domains();
    tracing::info!(
        "{} genres, {} ratings, years {:?}..={:?}",
        domains.genres.len(),
        domains.ratings.len(),
        domains.min_year(),
        domains.max_year()
    );

    let api_config = ApiConfig::from(&config.server);
    let state = AppState::new(Arc::new(dataset), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Games Dash stopped");
    Ok(())
}

fn print_summary(dataset: &Dataset, report: &LoadReport) {
    let domains = dataset.domains();

    println!("Rows read:      {}", report.rows_read);
    println!("Rows kept:      {}", report.rows_kept);
    println!("Rows dropped:   {}", report.rows_dropped());
    println!("  tbd score:    {}", report.pending_user_score);
    println!("  missing:      {}", report.missing_field);
    println!("  invalid:      {}", report.invalid_number);
    println!("  too old:      {}", report.before_min_year);
    println!("  malformed:    {}", report.malformed);
    println!();
    println!("Genres:  {}", domains.genres.join(", "));
    println!("Ratings: {}", domains.ratings.join(", "));
    match (domains.min_year(), domains.max_year()) {
        (Some(min), Some(max)) => println!("Years:   {}-{}", min, max),
        _ => println!("Years:   none"),
    }
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();

    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }

    Ok(())
}
