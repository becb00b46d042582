//! dcatmeta CLI — fetch catalog metadata for a dataset and distribution.
//!
//! Usage:
//!   dcatmeta 510 512 --field title --field modified
//!   dcatmeta 510 512 --base-url https://catalog.example.org/store/2

use clap::Parser;
use dcatmeta::{CatalogClient, CatalogConfig, HttpSource};

const DEFAULT_FIELDS: [&str; 4] = ["title", "description", "modified", "format"];

#[derive(Parser)]
#[command(
    name = "dcatmeta",
    version,
    about = "DCAT catalog metadata extraction"
)]
struct Cli {
    /// Dataset identifier in the catalog (e.g. "510")
    dataset_id: String,
    /// Distribution identifier (e.g. "512")
    resource_id: String,
    /// Metadata field to extract (repeatable; defaults to a basic set)
    #[arg(long = "field", value_name = "NAME")]
    fields: Vec<String>,
    /// Catalog store base URL
    #[arg(long)]
    base_url: Option<String>,
    /// Skip the correlated-API lookup
    #[arg(long)]
    no_api_id: bool,
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let config = match &cli.base_url {
        Some(base) => CatalogConfig::from_base(base)?,
        None => CatalogConfig::default(),
    };
    let fields: Vec<String> = if cli.fields.is_empty() {
        DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect()
    } else {
        cli.fields.clone()
    };

    let client = CatalogClient::with_source(config, Box::new(HttpSource::new()?));
    let metadata = client.get_metadata(&cli.dataset_id, &cli.resource_id, &fields, !cli.no_api_id)?;
    Ok(serde_json::to_string_pretty(&metadata)?)
}
