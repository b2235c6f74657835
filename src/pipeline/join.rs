use std::collections::HashMap;

use crate::types::{ProductDirectInfo, ProductPriceInfo};

/// The two per-product sources, keyed by product name
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    direct: HashMap<String, ProductDirectInfo>,
    prices: HashMap<String, ProductPriceInfo>,
}

/// Both records found for one update name
#[derive(Debug, Clone, Copy)]
pub struct JoinedProduct<'a> {
    pub name: &'a str,
    pub direct: &'a ProductDirectInfo,
    pub price: &'a ProductPriceInfo,
}

/// Which side of the join had no record for a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRecord {
    DirectInfo,
    PriceInfo,
}

impl MissingRecord {
    /// Diagnostic line for a name that could not be joined
    pub fn message(self, name: &str) -> String {
        match self {
            MissingRecord::DirectInfo => format!("Cannot find product ID for: {}", name),
            MissingRecord::PriceInfo => format!("Cannot find price info for: {}", name),
        }
    }
}

impl ProductCatalog {
    pub fn new(
        direct: HashMap<String, ProductDirectInfo>,
        prices: HashMap<String, ProductPriceInfo>,
    ) -> Self {
        Self { direct, prices }
    }

    /// Exact, case-sensitive lookup. Direct info is checked first.
    pub fn lookup<'a>(&'a self, name: &'a str) -> Result<JoinedProduct<'a>, MissingRecord> {
        let direct = self.direct.get(name).ok_or(MissingRecord::DirectInfo)?;
        let price = self.prices.get(name).ok_or(MissingRecord::PriceInfo)?;
        Ok(JoinedProduct {
            name,
            direct,
            price,
        })
    }

    pub fn direct_len(&self) -> usize {
        self.direct.len()
    }

    pub fn price_len(&self) -> usize {
        self.prices.len()
    }
}
