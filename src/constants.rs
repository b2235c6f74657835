/// File names used when no config file overrides them
pub const DEFAULT_FOLDER: &str = "csv";
pub const PRICE_UPDATE_FILE: &str = "1_price_update.csv";
pub const PRODUCT_IN_DIRECT_FILE: &str = "2_product_in_direct.csv";
pub const PRODUCT_NEW_PRICE_FILE: &str = "3_product_new_price.csv";
pub const CATALOG_UPDATE_OUTPUT_FILE: &str = "output.csv";
pub const COMBINED_DISCOUNT_OUTPUT_FILE: &str = "combined_discount_output.csv";

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "pricing.toml";

// Column offsets (0-based) in 1_price_update.csv
pub const UPDATE_NAME_COL: usize = 1;

// Column offsets (0-based) in 2_product_in_direct.csv
pub const DIRECT_ID_COL: usize = 0;
pub const DIRECT_NAME_COL: usize = 1;
pub const DIRECT_BASE_PRICE_COL: usize = 5;

// Column offsets (0-based) in 3_product_new_price.csv
pub const PRICE_CORE_COL: usize = 0;
pub const PRICE_NAME_COL: usize = 2;
pub const PRICE_FIRST_TIER_COL: usize = 3;
pub const PRICE_DISCOUNT1_COL: usize = 15;
pub const PRICE_DISCOUNT2_COL: usize = 16;

// Minimum row widths below which a row is skipped
pub const UPDATE_MIN_COLS: usize = 2;
pub const DIRECT_MIN_COLS: usize = 2;
pub const PRICE_MIN_COLS: usize = 4;

/// Fixed contact cell for the open-ended top tier
pub const CONTACT_LINK: &str =
    "<a href=\"mailto:eSupport@nuvoton.com\" target=\"_blank\">Contact</a>";

// Fixed values of the combined discount report
pub const DISCOUNT_TIER1_START: &str = "100";
pub const DISCOUNT_TIER2_START: &str = "500";
pub const DISCOUNT_TYPE: &str = "percentage";
pub const DISCOUNT_TAX: &str = "0";

pub const CATALOG_UPDATE_HEADER: [&str; 10] = [
    "ID",
    "Name",
    "New Base Price",
    "Short Description-EN",
    "Short Description-TW",
    "Short Description-DE",
    "Short Description-KR",
    "Short Description-JA",
    "Short Description-CN",
    "Original Base Price",
];

pub const COMBINED_DISCOUNT_HEADER: [&str; 8] = [
    "ID",
    "Name",
    "Starting at Tier 1",
    "Price Reduction Tier 1",
    "Starting at Tier 2",
    "Price Reduction Tier 2",
    "Type",
    "Tax",
];
