use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use okestore::catalog::{CatalogSource, StaticCatalog};
use okestore::config::{Config, StorefrontConfig};
use okestore::logging::init_tracing;
use okestore::ui::app::App;
use okestore::ui::runtime;
use okestore::ui::search::filter_products;
use okestore::upload::{UploadFile, Uploader};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "okestore", version, about = "Ok-E-store terminal storefront")]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print catalog products matching a query
    Search { query: String },
    /// Upload a file to object storage and print its public URL
    Upload {
        file: PathBuf,
        #[arg(long)]
        content_type: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let _enter = runtime.enter();

    let catalog = load_catalog(&config.storefront)?;

    match cli.command {
        None => {
            let app = App::new(&config.storefront, catalog);
            runtime::run(app).context("terminal session failed")?;
        }
        Some(Command::Search { query }) => {
            let products = catalog.products();
            for product in filter_products(&query, &products) {
                println!("{}\t{}\t{}", product.id, product.name, product.price_label());
            }
        }
        Some(Command::Upload { file, content_type }) => {
            let uploader = Uploader::from_config(&config.storage)
                .context("failed to configure object storage")?;
            let url = runtime.block_on(async {
                let upload = UploadFile::from_path(&file, content_type.as_deref())
                    .await
                    .with_context(|| format!("failed to read {}", file.display()))?;
                uploader.upload(upload).await.context("upload failed")
            })?;
            println!("{}", url);
        }
    }

    Ok(())
}

fn load_catalog(config: &StorefrontConfig) -> Result<Arc<dyn CatalogSource>> {
    let catalog = match &config.catalog_path {
        Some(path) => StaticCatalog::from_json_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => StaticCatalog::demo(),
    };
    Ok(Arc::new(catalog))
}
