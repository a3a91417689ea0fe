//! Application constants for the sales processor
//!
//! This module contains the input format contract, default paths, the local
//! product category table and report rendering constants used throughout
//! the application.

// =============================================================================
// Input Format
// =============================================================================

/// Field delimiter used by the sales ledger and the enriched output file
pub const FIELD_DELIMITER: char = '|';

/// Exact number of fields a data line must carry to become a candidate
pub const EXPECTED_FIELD_COUNT: usize = 8;

/// Grouping character stripped from numeric fields and removed from
/// product names ("1,916" -> 1916, "Mouse,Wireless" -> "MouseWireless")
pub const GROUPING_SEPARATOR: char = ',';

/// Encodings attempted when reading the ledger, in order
pub const SUPPORTED_ENCODINGS: &[&str] = &["utf-8", "latin-1", "cp1252"];

/// Required leading characters for the three ID fields
pub mod id_prefix {
    /// Transaction IDs must start with this prefix
    pub const TRANSACTION: &str = "T";

    /// Product IDs must start with this prefix
    pub const PRODUCT: &str = "P";

    /// Customer IDs must start with this prefix
    pub const CUSTOMER: &str = "C";
}

// =============================================================================
// Default Paths and Artifacts
// =============================================================================

/// Default input ledger location
pub const DEFAULT_INPUT_FILE: &str = "data/sales_data.txt";

/// Default directory for generated artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Basic report artifact (total revenue + per-region breakdown)
pub const BASIC_REPORT_FILE: &str = "report.txt";

/// Full analytics report artifact
pub const FULL_REPORT_FILE: &str = "full_report.txt";

/// Enriched 12-field data file
pub const ENRICHED_DATA_FILE: &str = "enriched_sales_data.txt";

/// Column headers of the enriched output file, in order
pub const ENRICHED_HEADER: [&str; 12] = [
    "TransactionID",
    "Date",
    "ProductID",
    "ProductName",
    "Quantity",
    "UnitPrice",
    "CustomerID",
    "Region",
    "API_Category",
    "API_Brand",
    "API_Rating",
    "API_Match",
];

// =============================================================================
// Product Catalog
// =============================================================================

/// Remote product catalog endpoint (at most 100 entries)
pub const CATALOG_URL: &str = "https://dummyjson.com/products?limit=100";

/// Timeout for the catalog fetch in seconds
pub const CATALOG_FETCH_TIMEOUT_SECS: u64 = 10;

/// Static product-id to category table used before any catalog lookup
pub const LOCAL_CATEGORIES: &[(&str, &str)] = &[
    ("P101", "Laptop"),
    ("P102", "Mouse"),
    ("P103", "Keyboard"),
    ("P104", "Monitor"),
    ("P105", "Webcam"),
    ("P106", "Headphones"),
    ("P107", "Accessories"),
    ("P108", "Storage"),
    ("P109", "Mouse"),
    ("P110", "Charger"),
];

/// Brand attached to local-table matches
pub const LOCAL_BRAND: &str = "TechStore";

/// Rating attached to local-table matches
pub const LOCAL_RATING: f64 = 4.5;

// =============================================================================
// Reporting
// =============================================================================

/// Currency symbol used by both report artifacts
pub const CURRENCY_SYMBOL: &str = "₹";

/// Default length of the ranked customer/product lists
pub const DEFAULT_TOP_N: usize = 5;

/// Products selling fewer units than this are flagged as low performers
pub const LOW_QUANTITY_THRESHOLD: i64 = 10;

/// Width of the section rule lines in the full report
pub const REPORT_RULE_WIDTH: usize = 60;
