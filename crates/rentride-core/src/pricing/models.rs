use std::fmt;

use serde::{Deserialize, Serialize};

/// Tax rate held in basis points so that tax arithmetic stays exact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    pub const fn from_bps(bps: u32) -> Self {
        Self(bps)
    }

    /// Convert a fractional rate (0.18 for 18%) to basis points
    pub fn from_fraction(rate: f64) -> Self {
        Self((rate.max(0.0) * 10_000.0).round() as u32)
    }

    pub fn bps(&self) -> u32 {
        self.0
    }

    /// Tax on `amount`, rounded half up to the nearest whole unit
    pub fn apply(&self, amount: u64) -> u64 {
        let scaled = amount as u128 * self.0 as u128;
        u64::try_from((scaled + 5_000) / 10_000).unwrap_or(u64::MAX)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

/// Totals produced by the price formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTotals {
    pub subtotal: u64,
    pub tax: u64,
    pub total: u64,
    /// Discount actually taken off (never more than `total`)
    pub discount: u64,
    pub final_amount: u64,
}

/// One priced add-on line in a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonLine {
    pub id: String,
    pub name: String,
    pub price: u64,
}

/// Full price breakdown shown on the booking summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub days: u32,
    pub daily_rate: u64,
    /// `days × daily_rate`
    pub rental: u64,
    pub addons: Vec<AddonLine>,
    pub platform_fee: u64,
    pub tax_rate: TaxRate,
    pub coupon: Option<String>,
    #[serde(flatten)]
    pub totals: PriceTotals,
}

impl PriceBreakdown {
    pub fn addons_total(&self) -> u64 {
        self.addons.iter().map(|a| a.price).sum()
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render an amount with thousands separators, e.g. `₹12,500`
pub fn format_amount(symbol: &str, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", symbol, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(1800).to_string(), "18%");
        assert_eq!(TaxRate::from_bps(1250).to_string(), "12.50%");
        assert_eq!(TaxRate::from_fraction(0.05).bps(), 500);
    }

    #[test]
    fn test_tax_saturates_above_u64() {
        let rate = TaxRate::from_bps(30_000);
        assert_eq!(rate.apply(u64::MAX / 2), u64::MAX);
        assert_eq!(rate.apply(1_000), 3_000);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("₹", 0), "₹0");
        assert_eq!(format_amount("₹", 999), "₹999");
        assert_eq!(format_amount("₹", 3658), "₹3,658");
        assert_eq!(format_amount("$", 1_234_567), "$1,234,567");
    }
}
