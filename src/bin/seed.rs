use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use trendify_api::catalog::seed::{reseed, seed_products};
use trendify_api::catalog::ProductRepository;
use trendify_api::config;
use trendify_api::lifecycle::open_store;
use trendify_api::observability::logging;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Replace the product collection with the initial catalog", long_about = None)]
struct Cli {
    /// Optional TOML configuration file. Environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the seed products without touching the database.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    logging::init_logging(&config.observability);

    let products = seed_products()?;

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    let store = open_store(&config.database).await?;
    let repo = ProductRepository::new(Arc::clone(&store));

    println!(
        "Deleting existing documents from '{}.{}'...",
        config.database.database_name, config.database.collection
    );
    let outcome = reseed(&repo, &products).await;
    store.close().await;

    let (removed, inserted) = outcome?;
    println!("Removed {} documents.", removed);
    println!("Successfully inserted {} documents.", inserted.len());
    Ok(())
}
