use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use roamy_core::{Catalog, CatalogSearch, HotelQuery, HotelSort, SortOrder};
use roamy_planner::{SuggestionEngine, SuggestionRequest};
use roamy_store::app_config::{Config, StoreConfig};
use roamy_store::{DbClient, MemoryCatalog, PgCatalogRepository, StoreBackend};

#[derive(Parser, Debug)]
#[command(name = "roamy", author, version, about = "Travel suggestions and catalog search")]
struct Cli {
    /// Directory holding default.toml and optional overrides
    #[arg(long, global = true, default_value = "config")]
    config_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full suggestions for a JSON request read from a file or stdin
    Suggest {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Suggestions for a trip from one place to another
    Quick {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        budget: Option<String>,
        #[arg(long = "interest")]
        interests: Vec<String>,
    },
    /// Suggestions for a destination without an origin
    Destination {
        name: String,
        #[arg(long)]
        budget: Option<String>,
        #[arg(long = "interest")]
        interests: Vec<String>,
        #[arg(long)]
        days: Option<i64>,
    },
    /// Destinations whose name, city or country contains QUERY
    Search { query: String },
    /// All active destinations
    Destinations,
    Trending,
    /// Hotels of one destination
    Hotels {
        destination_id: i64,
        #[arg(long)]
        min_price: Option<Decimal>,
        #[arg(long)]
        max_price: Option<Decimal>,
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        #[arg(long, value_enum)]
        order: Option<OrderArg>,
    },
    /// Top hotels and attractions of a stored destination
    Recommend {
        name: String,
        #[arg(long)]
        budget: Option<String>,
    },
    /// Active attractions of one destination
    Attractions {
        destination_id: i64,
        #[arg(long = "interest")]
        interests: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Price,
    Rating,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrderArg {
    Asc,
    Desc,
}

impl From<SortArg> for HotelSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Price => HotelSort::Price,
            SortArg::Rating => HotelSort::Rating,
        }
    }
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries JSON only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roamy_cli=info,roamy_planner=info,roamy_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load_from(&cli.config_dir)
        .with_context(|| format!("Failed to load config from {}", cli.config_dir))?;
    info!("Using {:?} catalog backend", config.store.backend);

    let catalog = open_catalog(&config.store, Path::new(&cli.config_dir)).await?;

    match cli.command {
        Command::Suggest { file } => {
            let raw = match file {
                Some(path) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut raw = String::new();
                    tokio::io::stdin().read_to_string(&mut raw).await.context("Failed to read stdin")?;
                    raw
                }
            };
            let request: SuggestionRequest = serde_json::from_str(&raw).context("Invalid suggestion request")?;
            suggest(catalog, &config, &request).await
        }
        Command::Quick { from, to, budget, interests } => {
            let request = SuggestionRequest::quick(&from, &to, budget.as_deref(), interests);
            suggest(catalog, &config, &request).await
        }
        Command::Destination { name, budget, interests, days } => {
            let request = SuggestionRequest::for_destination(&name, budget.as_deref(), interests, days);
            suggest(catalog, &config, &request).await
        }
        Command::Search { query } => print_json(&CatalogSearch::new(catalog).search_destinations(&query).await?),
        Command::Destinations => print_json(&CatalogSearch::new(catalog).list_destinations().await?),
        Command::Trending => print_json(&CatalogSearch::new(catalog).trending_destinations().await?),
        Command::Hotels { destination_id, min_price, max_price, min_rating, sort, order } => {
            let query = HotelQuery {
                min_price,
                max_price,
                min_rating,
                sort_by: sort.map(HotelSort::from),
                sort_order: order.map(SortOrder::from),
            };
            print_json(&CatalogSearch::new(catalog).hotels_for_destination(destination_id, &query).await?)
        }
        Command::Recommend { name, budget } => {
            print_json(&CatalogSearch::new(catalog).recommendations(&name, budget.as_deref()).await?)
        }
        Command::Attractions { destination_id, interests } => {
            print_json(&CatalogSearch::new(catalog).attractions_for_destination(destination_id, &interests).await?)
        }
    }
}

async fn open_catalog(store: &StoreConfig, config_dir: &Path) -> Result<Catalog> {
    match store.backend {
        StoreBackend::Memory => {
            let catalog = match store.seed_file(config_dir) {
                Some(path) => MemoryCatalog::from_file(&path)
                    .await
                    .with_context(|| format!("Failed to load catalog seed {}", path.display()))?,
                None => {
                    warn!("No seed_path configured, starting with an empty catalog");
                    MemoryCatalog::empty()
                }
            };
            Ok(Catalog::from_store(Arc::new(catalog)))
        }
        StoreBackend::Postgres => {
            let url = store
                .database_url
                .as_deref()
                .context("store.database_url is required for the postgres backend")?;
            let db = DbClient::from_config(store, url)
                .await
                .context("Failed to connect to catalog database")?;
            Ok(Catalog::from_store(Arc::new(PgCatalogRepository::new(db.pool))))
        }
    }
}

async fn suggest(catalog: Catalog, config: &Config, request: &SuggestionRequest) -> Result<()> {
    let engine = SuggestionEngine::new(catalog, &config.suggestions);
    let response = engine.generate(request).await;
    print_json(&response)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
