//! `catalog` - query the storefront catalog from the command line.
//!
//! Reads `COSMIC_BUCKET_SLUG` / `COSMIC_READ_KEY` (and optionally
//! `COSMIC_API_URL`) from the environment or a `.env` file and prints the
//! result of one catalog query as JSON.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use storefront_catalog::{
    category_types, max_price, CatalogRepository, CategoryType, ColorTemperature,
    HttpContentStore, LightType, ProductFilter, SortBy, StoreConfig, DEFAULT_FEATURED_LIMIT,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catalog", version, about = "Query the lighting storefront catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// All products, featured first
    Products,
    /// One product by slug
    Product { slug: String },
    /// Featured products
    Featured {
        #[arg(long, default_value_t = DEFAULT_FEATURED_LIMIT)]
        limit: usize,
    },
    /// All categories in display order
    Categories {
        /// Include how many products each category has
        #[arg(long)]
        counts: bool,
    },
    /// One category by slug
    Category { slug: String },
    /// All applications
    Applications,
    /// One application by slug
    Application { slug: String },
    /// Products in a category
    InCategory { slug: String },
    /// Free-text product search
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Products priced between MIN and MAX (inclusive)
    PriceRange { min: Decimal, max: Decimal },
    /// Filter and sort the listing like the products page
    Browse {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        category_type: Option<String>,
        #[arg(long)]
        min_price: Option<Decimal>,
        #[arg(long)]
        max_price: Option<Decimal>,
        #[arg(long)]
        in_stock: bool,
        #[arg(long)]
        featured: bool,
        #[arg(long)]
        dimmable: bool,
        #[arg(long)]
        light_type: Option<String>,
        #[arg(long)]
        color_temp: Option<String>,
        #[arg(long, default_value = "featured")]
        sort: SortBy,
    },
}

#[derive(Serialize)]
struct BrowseOutput<T> {
    total: usize,
    shown: usize,
    max_price: Option<Decimal>,
    category_types: Vec<CategoryType>,
    products: Vec<T>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "configuration error");
            return ExitCode::FAILURE;
        }
    };
    let catalog = CatalogRepository::new(HttpContentStore::new(config));

    match run(&catalog, cli.command).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "catalog query failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(
    catalog: &CatalogRepository<HttpContentStore>,
    command: Command,
) -> Result<String, Box<dyn std::error::Error>> {
    let json = match command {
        Command::Products => to_json(&catalog.list_products().await?)?,
        Command::Product { slug } => found(&slug, catalog.get_product(&slug).await?)?,
        Command::Featured { limit } => to_json(&catalog.list_featured_products(limit).await)?,
        Command::Categories { counts: true } => {
            to_json(&catalog.list_categories_with_counts().await)?
        }
        Command::Categories { counts: false } => to_json(&catalog.list_categories().await?)?,
        Command::Category { slug } => found(&slug, catalog.get_category(&slug).await?)?,
        Command::Applications => to_json(&catalog.list_applications().await?)?,
        Command::Application { slug } => found(&slug, catalog.get_application(&slug).await?)?,
        Command::InCategory { slug } => {
            to_json(&catalog.list_products_by_category(&slug).await)?
        }
        Command::Search { query } => to_json(&catalog.search_products(&query).await)?,
        Command::PriceRange { min, max } => {
            to_json(&catalog.list_products_by_price_range(min, max).await)?
        }
        Command::Browse {
            query,
            category,
            category_type,
            min_price,
            max_price: max,
            in_stock,
            featured,
            dimmable,
            light_type,
            color_temp,
            sort,
        } => {
            let (products, categories) =
                tokio::join!(catalog.list_products(), catalog.list_categories());
            let (products, categories) = (products?, categories?);

            let mut filter = ProductFilter::new();
            filter.query = query;
            filter.category = category;
            filter.category_type = category_type.map(CategoryType::from);
            filter.light_type = light_type.map(LightType::from);
            filter.color_temp = color_temp.map(ColorTemperature::from);
            if min_price.is_some() || max.is_some() {
                filter = filter.price_between(
                    min_price.unwrap_or(Decimal::ZERO),
                    max.unwrap_or(Decimal::MAX),
                );
            }
            if in_stock {
                filter = filter.in_stock(true);
            }
            if featured {
                filter = filter.featured(true);
            }
            if dimmable {
                filter = filter.dimmable(true);
            }

            let shown = filter.apply(&products, sort);
            to_json(&BrowseOutput {
                total: products.len(),
                shown: shown.len(),
                max_price: max_price(&products),
                category_types: category_types(&categories),
                products: shown,
            })?
        }
    };
    Ok(json)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

fn found<T: Serialize>(
    slug: &str,
    value: Option<T>,
) -> Result<String, Box<dyn std::error::Error>> {
    match value {
        Some(value) => Ok(to_json(&value)?),
        None => Err(format!("'{}' not found", slug).into()),
    }
}
