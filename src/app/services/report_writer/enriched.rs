//! Enriched data file writer
//!
//! Writes the final record set back out with the four enrichment columns
//! appended, pipe-delimited, header first. Unmatched enrichment fields
//! render as empty strings; the match flag renders as true/false.

use std::path::Path;
use tracing::info;

use crate::Result;
use crate::app::models::Transaction;
use crate::constants::ENRICHED_HEADER;

/// Write the 12-field enriched data file.
pub fn write_enriched_data(path: &Path, transactions: &[Transaction]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'|')
        .from_path(path)
        .map_err(crate::Error::from)?;

    writer.write_record(ENRICHED_HEADER)?;

    for transaction in transactions {
        let enrichment = &transaction.enrichment;
        let quantity = transaction.quantity.to_string();
        let unit_price = transaction.unit_price.to_string();
        let rating = enrichment
            .rating
            .map(|rating| rating.to_string())
            .unwrap_or_default();

        writer.write_record([
            transaction.transaction_id.as_str(),
            transaction.date.as_str(),
            transaction.product_id.as_str(),
            transaction.product_name.as_str(),
            quantity.as_str(),
            unit_price.as_str(),
            transaction.customer_id.as_str(),
            transaction.region.as_str(),
            enrichment.category.as_deref().unwrap_or(""),
            enrichment.brand.as_deref().unwrap_or(""),
            rating.as_str(),
            if enrichment.matched { "true" } else { "false" },
        ])?;
    }

    writer.flush().map_err(crate::Error::from)?;
    info!(
        "Enriched data file written to '{}' ({} records)",
        path.display(),
        transactions.len()
    );
    Ok(())
}
