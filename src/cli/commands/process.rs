//! Process command: the full pipeline run
//!
//! Read -> validate -> filter -> enrich -> aggregate -> write artifacts.
//! Per-record problems end up in the validation summary; only
//! infrastructure failures (unreadable input, unwritable output) abort.

use std::time::Duration;
use tracing::{info, warn};

use crate::Result;
use crate::app::adapters::filesystem;
use crate::app::services::analytics::build_analytics;
use crate::app::services::product_catalog::lookup::{ProductLookup, build_chain};
use crate::app::services::product_catalog::{enrich_transactions, fetch_catalog};
use crate::app::services::record_processor::{RecordProcessor, ValidationSummary, apply_filters};
use crate::app::services::report_writer::{
    write_basic_report, write_enriched_data, write_full_report,
};
use crate::cli::args::ProcessArgs;
use crate::config::CatalogConfig;
use crate::constants::{BASIC_REPORT_FILE, ENRICHED_DATA_FILE, FULL_REPORT_FILE};

use super::shared::{print_run_summary, setup_logging};

/// Run the full processing pipeline.
pub async fn run_process(args: ProcessArgs) -> Result<ValidationSummary> {
    setup_logging(args.get_log_level())?;

    let config = args.to_config();
    config.validate()?;

    info!("Processing ledger '{}'", config.input_path.display());
    let lines = filesystem::read_sales_lines(&config.input_path)?;

    let result = RecordProcessor::new().process_lines(&lines);
    let summary = result.summary.clone();

    let mut transactions = apply_filters(result.transactions, &config.filters);

    let chain = build_lookup_chain(&config.catalog).await;
    let matched = enrich_transactions(&mut transactions, &chain);

    let analytics = build_analytics(
        &transactions,
        config.top_n,
        config.low_quantity_threshold,
    );

    filesystem::ensure_output_dir(&config.output_dir)?;
    write_enriched_data(&config.output_dir.join(ENRICHED_DATA_FILE), &transactions)?;
    write_basic_report(
        &config.output_dir.join(BASIC_REPORT_FILE),
        &analytics.regions,
        &analytics.metrics,
    )?;
    write_full_report(
        &config.output_dir.join(FULL_REPORT_FILE),
        &analytics,
        &summary,
    )?;

    print_run_summary(&summary, &analytics, transactions.len(), matched);
    Ok(summary)
}

/// Build the enrichment chain, degrading to the local table when the
/// catalog is disabled or unreachable.
async fn build_lookup_chain(catalog: &CatalogConfig) -> Vec<Box<dyn ProductLookup>> {
    if !catalog.enabled {
        info!("Catalog fetch disabled; enriching from the local table only");
        return build_chain(None);
    }

    match fetch_catalog(&catalog.url, Duration::from_secs(catalog.timeout_secs)).await {
        Ok(products) => build_chain(Some(products)),
        Err(error) => {
            warn!(
                "Catalog fetch failed ({}); continuing with local-table enrichment only",
                error
            );
            build_chain(None)
        }
    }
}
