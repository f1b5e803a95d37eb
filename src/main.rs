use anyhow::Result;
use carparts_seed::{cli, run, CliOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "carparts_seed=info".into()),
        )
        .init();

    let options = CliOptions::from_matches(&cli().get_matches());
    tracing::info!(database = %options.database, "Seeding database");

    let report = run(&options).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        tracing::info!(
            role_created = report.role_created,
            categories_created = report.categories_created,
            existing_listings = report.existing_listings,
            listings_inserted = report.listings_inserted,
            "Seeding finished"
        );
    }

    Ok(())
}
