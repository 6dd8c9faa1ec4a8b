//! Loads catalog page dumps into the section store.
//!
//! Usage: `import-catalog <page.json>...`
//!
//! Every section in the given pages is upserted. Sections stored for a
//! semester that appears in the pages but are missing from them are deleted.

use std::collections::BTreeMap;

use advisor_core::catalog::{parse_catalog_page, stale_sections};
use advisor_core::models::{Section, SectionKey};
use advisor_core::repository::SectionRepository;
use advisor_db::{PgStore, config::StoreConfig, create_pool, schema::initialize_database};
use color_eyre::eyre::{Result, WrapErr, bail};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = StoreConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("usage: import-catalog <page.json>...");
    }

    let mut by_semester: BTreeMap<String, Vec<Section>> = BTreeMap::new();
    for path in &paths {
        let body = tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("Failed to read catalog page {path}"))?;
        let sections =
            parse_catalog_page(&body).wrap_err_with(|| format!("Failed to parse {path}"))?;
        info!("Read {} sections from {}", sections.len(), path);

        for section in sections {
            by_semester
                .entry(section.semester.clone())
                .or_default()
                .push(section);
        }
    }

    let db_pool = create_pool(&config.database_url, config.max_connections).await?;
    initialize_database(&db_pool).await?;
    let store = PgStore::new(db_pool);

    for (semester, incoming) in &by_semester {
        let existing: Vec<SectionKey> = store
            .sections_for_semester(semester)
            .await?
            .iter()
            .map(Section::key)
            .collect();

        for section in incoming {
            store.upsert_section(section).await?;
        }

        let stale = stale_sections(&existing, incoming);
        for key in &stale {
            warn!("Removing section {} no longer offered", key);
            store.delete_section(key).await?;
        }

        info!(
            "Semester {}: {} sections upserted, {} removed",
            semester,
            incoming.len(),
            stale.len()
        );
    }

    Ok(())
}
