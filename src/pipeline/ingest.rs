use csv::ByteRecord;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, error, info, instrument};

use crate::constants::*;
use crate::pipeline::discount::format_discount;
use crate::types::{Core, ProductDirectInfo, ProductPriceInfo, UpdateNameSet};

/// Result of reading one input file.
///
/// Readers never fail outright: an open or read error is logged, recorded in
/// `failure`, and whatever was accumulated up to that point is returned.
#[derive(Debug, Clone)]
pub struct Ingested<T> {
    pub data: T,
    /// Data rows seen after the header
    pub rows_read: usize,
    /// Rows too short to carry the required columns
    pub rows_skipped: usize,
    pub failure: Option<String>,
}

/// Trimmed field at `idx`, or empty when the row is shorter.
///
/// Only the columns a reader asks for are decoded, and invalid UTF-8 is
/// replaced rather than rejected, so legacy-encoded cells elsewhere in the row
/// cannot cost the row.
fn field(record: &ByteRecord, idx: usize) -> String {
    record
        .get(idx)
        .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
        .unwrap_or_default()
}

/// Shared row loop: skip one header row, drop rows narrower than `min_cols`,
/// hand every other row to `apply`.
fn ingest<T, F>(path: &Path, min_cols: usize, mut apply: F) -> Ingested<T>
where
    T: Default,
    F: FnMut(&mut T, &ByteRecord),
{
    let mut out = Ingested {
        data: T::default(),
        rows_read: 0,
        rows_skipped: 0,
        failure: None,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            let msg = format!("Failed to open '{}': {}", path.display(), e);
            error!("{}", msg);
            out.failure = Some(msg);
            return out;
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    for result in reader.byte_records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let msg = format!(
                    "Read error in '{}' after {} rows: {}",
                    path.display(),
                    out.rows_read,
                    e
                );
                error!("{}", msg);
                out.failure = Some(msg);
                break;
            }
        };

        out.rows_read += 1;
        if record.len() < min_cols {
            debug!("Skipping short row {} ({} columns)", out.rows_read, record.len());
            out.rows_skipped += 1;
            continue;
        }
        apply(&mut out.data, &record);
    }

    info!(
        "Read {} rows ({} skipped)",
        out.rows_read, out.rows_skipped
    );
    out
}

/// Read 1_price_update.csv: product name in column 2
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_update_names(path: &Path) -> Ingested<UpdateNameSet> {
    ingest(path, UPDATE_MIN_COLS, |names: &mut UpdateNameSet, record| {
        names.insert(field(record, UPDATE_NAME_COL));
    })
}

/// Read 2_product_in_direct.csv: id in column 1, name in column 2, base price in column 6
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_direct_info(path: &Path) -> Ingested<HashMap<String, ProductDirectInfo>> {
    ingest(
        path,
        DIRECT_MIN_COLS,
        |map: &mut HashMap<String, ProductDirectInfo>, record| {
            let info = ProductDirectInfo {
                id: field(record, DIRECT_ID_COL),
                base_price: field(record, DIRECT_BASE_PRICE_COL),
            };
            map.insert(field(record, DIRECT_NAME_COL), info);
        },
    )
}

/// Read 3_product_new_price.csv: core, name, five tier prices and two discounts
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_price_info(path: &Path) -> Ingested<HashMap<String, ProductPriceInfo>> {
    ingest(
        path,
        PRICE_MIN_COLS,
        |map: &mut HashMap<String, ProductPriceInfo>, record| {
            let core_label = field(record, PRICE_CORE_COL);
            let info = ProductPriceInfo {
                core: Core::parse(&core_label),
                core_label,
                name: field(record, PRICE_NAME_COL),
                prices: std::array::from_fn(|i| field(record, PRICE_FIRST_TIER_COL + i)),
                discount1: format_discount(&field(record, PRICE_DISCOUNT1_COL)),
                discount2: format_discount(&field(record, PRICE_DISCOUNT2_COL)),
            };
            map.insert(info.name.clone(), info);
        },
    )
}
