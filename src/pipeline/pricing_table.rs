use crate::constants::CONTACT_LINK;
use crate::types::{Core, TierPrices};

const TABLE_OPEN: &str = "<table border=\"1\" cellpadding=\"5\" style=\"text-align: center; border-collapse: collapse; border: 1px #E8E8E8 solid;\"><tbody>";
const TABLE_HEADER_ROW: &str =
    "<tr><td><strong>Quantity</strong></td><td><strong>Unit Price (USD)</strong></td></tr>";
const TABLE_CLOSE: &str = "</tbody></table>";
const NO_PRICING_ROW: &str =
    "<tr><td colspan=\"2\">No pricing information available</td></tr>";

/// What goes in the price cell of a tier row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierPrice {
    /// Index into the product's tier prices
    Index(usize),
    /// Open-ended top tier
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRow {
    pub quantity: &'static str,
    pub price: TierPrice,
}

const fn row(quantity: &'static str, price: TierPrice) -> TierRow {
    TierRow { quantity, price }
}

static STANDARD_TIERS: [TierRow; 6] = [
    row("1-99", TierPrice::Index(0)),
    row("100-499", TierPrice::Index(1)),
    row("500-999", TierPrice::Index(2)),
    row("1000-1999", TierPrice::Index(3)),
    row("2000-4999", TierPrice::Index(4)),
    row("5000+", TierPrice::Contact),
];

static M4_TIERS: [TierRow; 4] = [
    row("1-999", TierPrice::Index(0)),
    row("1000-1999", TierPrice::Index(1)),
    row("2000-4999", TierPrice::Index(2)),
    row("5000+", TierPrice::Contact),
];

static MPU_TIERS: [TierRow; 4] = [
    row("1-99", TierPrice::Index(0)),
    row("100-499", TierPrice::Index(1)),
    row("500-999", TierPrice::Index(2)),
    row("1000+", TierPrice::Contact),
];

/// Quantity tiers for a core; empty for cores without a pricing schema
pub fn tier_schema(core: Core) -> &'static [TierRow] {
    match core {
        Core::Standard => &STANDARD_TIERS,
        Core::M4 => &M4_TIERS,
        Core::Mpu => &MPU_TIERS,
        Core::Other => &[],
    }
}

/// Render the HTML pricing table embedded in the catalog short description.
///
/// The markup is consumed verbatim by the catalog system, so the tags,
/// attributes and inline style must not change.
pub fn render_pricing_table(core: Core, prices: &TierPrices) -> String {
    let mut html = String::with_capacity(512);
    html.push_str(TABLE_OPEN);
    html.push_str(TABLE_HEADER_ROW);

    let tiers = tier_schema(core);
    if tiers.is_empty() {
        html.push_str(NO_PRICING_ROW);
    }
    for tier in tiers {
        let cell = match tier.price {
            TierPrice::Index(i) => prices[i].as_str(),
            TierPrice::Contact => CONTACT_LINK,
        };
        html.push_str("<tr><td>");
        html.push_str(tier.quantity);
        html.push_str("</td><td>");
        html.push_str(cell);
        html.push_str("</td></tr>");
    }

    html.push_str(TABLE_CLOSE);
    html
}
