use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rift_stats::api::state::AppState;
use rift_stats::calculate::run_search;
use rift_stats::config::{AppConfig, Overrides};
use rift_stats::search::{select_matches, SearchCriteria, SearchParams};
use rift_stats::storage::{MatchDataset, StorageConfig};

#[derive(Parser)]
#[command(name = "rift-stats")]
#[command(about = "Draft, performance and objective statistics for competitive LoL matches")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the statistics report for a search as JSON
    Report {
        #[command(flatten)]
        search: SearchArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List the ids of the matches a search selects
    Matches {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Check the dataset for integrity issues
    Check,

    /// Start the API server
    Serve {
        /// Host to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Exact game patch, e.g. 14.4
    #[arg(long)]
    patch: Option<String>,

    /// Competition name substring
    #[arg(long)]
    competition: Option<String>,

    /// Team code that played the match
    #[arg(long)]
    team: Option<String>,

    /// Role: top, jungle, mid, bot, support or any
    #[arg(long)]
    role: Option<String>,

    /// Player name in either lineup
    #[arg(long)]
    player: Option<String>,
}

impl SearchArgs {
    fn into_criteria(self) -> Result<SearchCriteria> {
        let params = SearchParams {
            patch: self.patch,
            competition: self.competition,
            team: self.team,
            role: self.role,
            player: self.player,
        };
        Ok(params.into_criteria()?)
    }
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

fn load_dataset(config: &AppConfig) -> Result<MatchDataset> {
    let storage = StorageConfig::new(config.data_dir.clone());
    MatchDataset::load(&storage)
        .with_context(|| format!("Failed to load match data from {}", config.data_dir.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (host, port) = match &cli.command {
        Commands::Serve { host, port } => (host.clone(), *port),
        _ => (None, None),
    };
    let config = AppConfig::load_or_default(&cli.config)
        .and_then(|config| {
            config.apply(Overrides {
                data_dir: cli.data_dir,
                log_level: cli.log_level,
                host,
                port,
            })
        })
        .with_context(|| format!("Invalid configuration from {}", cli.config.display()))?;

    init_tracing(&config.log_level, cli.json_logs);
    tracing::info!("Starting rift-stats v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Report { search, pretty } => {
            let criteria = search.into_criteria()?;
            let dataset = load_dataset(&config)?;
            let report = run_search(&dataset, &criteria);

            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", json);
        }
        Commands::Matches { search } => {
            let criteria = search.into_criteria()?;
            let dataset = load_dataset(&config)?;
            let selection = select_matches(&dataset, &criteria);

            for id in selection.ids() {
                println!("{}", id);
            }
            tracing::info!("{} matches selected", selection.len());
        }
        Commands::Check => {
            let dataset = load_dataset(&config)?;
            let issues = dataset.integrity_issues();
            if issues.is_empty() {
                println!("No integrity issues found");
            } else {
                println!("\n=== Integrity Issues ({}) ===", issues.len());
                for issue in &issues {
                    println!("  - {}", issue);
                }
                bail!("dataset has {} integrity issues", issues.len());
            }
        }
        Commands::Serve { .. } => {
            let dataset = load_dataset(&config)?;
            let state = AppState::new(dataset, config.server.cors_origin.clone());
            let app = rift_stats::api::build_router(state);

            let addr = config.server.addr();
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
