use indexmap::IndexSet;
use std::fmt;

/// Product names selected for the reports, in the order the update file lists them
pub type UpdateNameSet = IndexSet<String>;

/// The five tier prices of a product; cores with fewer tiers leave the tail unused
pub type TierPrices = [String; 5];

/// Row from 2_product_in_direct.csv. Keyed externally by product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDirectInfo {
    pub id: String,
    pub base_price: String,
}

/// Row from 3_product_new_price.csv. Keyed externally by product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPriceInfo {
    /// Category as written in the source file
    pub core_label: String,
    /// Category resolved once at ingest
    pub core: Core,
    pub name: String,
    pub prices: TierPrices,
    /// Normalized percentage (two decimals, no `%`), or empty
    pub discount1: String,
    pub discount2: String,
}

impl ProductPriceInfo {
    /// Price of the first quantity tier, used as the new base price
    pub fn first_tier_price(&self) -> &str {
        &self.prices[0]
    }
}

/// Product category that selects the pricing tier schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Core {
    /// 8051, M0M23 and Audio share the six-row schema
    Standard,
    M4,
    Mpu,
    Other,
}

impl Core {
    /// Case-insensitive resolution of a core label; unknown labels map to `Other`
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if ["8051", "M0M23", "Audio"]
            .iter()
            .any(|known| label.eq_ignore_ascii_case(known))
        {
            Core::Standard
        } else if label.eq_ignore_ascii_case("M4") {
            Core::M4
        } else if label.eq_ignore_ascii_case("MPU") {
            Core::Mpu
        } else {
            Core::Other
        }
    }

    /// Only MPU and M4 products go into the combined discount report
    pub fn has_tiered_discount(self) -> bool {
        matches!(self, Core::Mpu | Core::M4)
    }
}

impl fmt::Display for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Core::Standard => "8051/M0M23/Audio",
            Core::M4 => "M4",
            Core::Mpu => "MPU",
            Core::Other => "other",
        };
        f.write_str(name)
    }
}
