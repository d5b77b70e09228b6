use anyhow::Context;
use clap::Parser;
use space_scout::config::Cli;
use space_scout::countries::format_price;
use space_scout::search::SpaceSearch;
use space_scout::sources::{CsvFileSource, SheetSource, SpaceSource};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let source: Box<dyn SpaceSource> = match &cli.csv_file {
        Some(path) => Box::new(CsvFileSource::new(path)),
        None => Box::new(SheetSource::with_config(cli.source_config())?),
    };

    info!("Loading spaces from {}", source.source_name());
    let spaces = source.load().await?;
    if spaces.is_empty() {
        warn!("No spaces loaded");
    }
    let search = SpaceSearch::new(spaces);

    if cli.list_countries {
        for country in search.countries() {
            println!("{}", country);
        }
        return Ok(());
    }

    let country = cli.country.as_deref();
    let results = match cli.query.as_deref() {
        Some(query) => {
            let outcome = search.run(query, country)?;
            if let Some(filter) = &outcome.filter {
                info!("Parsed filter: {}", serde_json::to_string(filter)?);
            }
            info!("{} matches ({:?})", outcome.spaces.len(), outcome.mode);
            outcome.spaces
        }
        None => search.in_country(country),
    };

    for (i, space) in results.iter().enumerate() {
        println!("{}. {} ({})", i + 1, space.name, format_price(space));
        println!("   {} · {} · {}", space.space_type, space.style, space.area);
        println!("   {}–{} people", space.min_capacity, space.capacity);
        println!("   {} / {} ({})", space.region, space.sub_region, space.country);
        println!();
    }

    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(&results)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved {} spaces to {}", results.len(), path.display());
    }

    Ok(())
}
