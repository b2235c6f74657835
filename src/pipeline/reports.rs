use tracing::{debug, info, instrument, warn};

use crate::constants::*;
use crate::pipeline::egress::ReportRow;
use crate::pipeline::join::ProductCatalog;
use crate::pipeline::pricing_table::render_pricing_table;
use crate::types::UpdateNameSet;

/// Row of output.csv. The short description is mirrored into all six locale columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogUpdateRow {
    pub id: String,
    pub name: String,
    pub new_base_price: String,
    pub short_description: String,
    pub original_base_price: String,
}

impl ReportRow for CatalogUpdateRow {
    const HEADER: &'static [&'static str] = &CATALOG_UPDATE_HEADER;

    fn fields(&self) -> Vec<&str> {
        let desc = self.short_description.as_str();
        vec![
            self.id.as_str(),
            self.name.as_str(),
            self.new_base_price.as_str(),
            desc,
            desc,
            desc,
            desc,
            desc,
            desc,
            self.original_base_price.as_str(),
        ]
    }
}

/// Row of combined_discount_output.csv
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountRow {
    pub id: String,
    pub name: String,
    pub tier1_reduction: String,
    pub tier2_reduction: String,
}

impl ReportRow for DiscountRow {
    const HEADER: &'static [&'static str] = &COMBINED_DISCOUNT_HEADER;

    fn fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.name.as_str(),
            DISCOUNT_TIER1_START,
            self.tier1_reduction.as_str(),
            DISCOUNT_TIER2_START,
            self.tier2_reduction.as_str(),
            DISCOUNT_TYPE,
            DISCOUNT_TAX,
        ]
    }
}

/// Rows of one report plus what was left out
#[derive(Debug, Clone)]
pub struct ReportBuild<R> {
    pub rows: Vec<R>,
    /// Names dropped because a direct or price record was missing
    pub missing: usize,
    /// Names joined but excluded by the report's category filter
    pub filtered: usize,
}

impl<R> ReportBuild<R> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            missing: 0,
            filtered: 0,
        }
    }
}

/// One row per joinable update name, in update-file order
#[instrument(skip_all, fields(names = names.len()))]
pub fn build_catalog_update(
    names: &UpdateNameSet,
    catalog: &ProductCatalog,
) -> ReportBuild<CatalogUpdateRow> {
    let mut build = ReportBuild::new();

    for name in names {
        let product = match catalog.lookup(name) {
            Ok(product) => product,
            Err(missing) => {
                warn!("{}", missing.message(name));
                build.missing += 1;
                continue;
            }
        };

        build.rows.push(CatalogUpdateRow {
            id: product.direct.id.clone(),
            name: name.clone(),
            new_base_price: product.price.first_tier_price().to_string(),
            short_description: render_pricing_table(product.price.core, &product.price.prices),
            original_base_price: product.direct.base_price.clone(),
        });
    }

    info!(
        "Built catalog update: {} rows, {} missing",
        build.rows.len(),
        build.missing
    );
    build
}

/// One row per joinable MPU or M4 update name, in update-file order
#[instrument(skip_all, fields(names = names.len()))]
pub fn build_combined_discount(
    names: &UpdateNameSet,
    catalog: &ProductCatalog,
) -> ReportBuild<DiscountRow> {
    let mut build = ReportBuild::new();

    for name in names {
        let product = match catalog.lookup(name) {
            Ok(product) => product,
            Err(missing) => {
                warn!("{}", missing.message(name));
                build.missing += 1;
                continue;
            }
        };

        if !product.price.core.has_tiered_discount() {
            debug!("Excluding {} (core {})", name, product.price.core);
            build.filtered += 1;
            continue;
        }

        build.rows.push(DiscountRow {
            id: product.direct.id.clone(),
            name: name.clone(),
            tier1_reduction: product.price.discount1.clone(),
            tier2_reduction: product.price.discount2.clone(),
        });
    }

    info!(
        "Built combined discount: {} rows, {} missing, {} filtered",
        build.rows.len(),
        build.missing,
        build.filtered
    );
    build
}
