mod calculator;
mod models;

pub use calculator::{compute_total, PriceCalculator, QuoteRequest};
pub use models::{format_amount, AddonLine, PriceBreakdown, PriceTotals, TaxRate};
