use anyhow::Result;

use rentride_core::booking::BookingWindow;
use rentride_core::catalog::Catalog;
use rentride_core::pricing::{format_amount, PriceCalculator, QuoteRequest};
use rentride_core::AppConfig;

/// How the rental length was given on the command line
pub enum Duration {
    Days(u32),
    Window { pickup: String, return_at: String },
}

impl Duration {
    fn days(&self) -> Result<u32> {
        match self {
            Duration::Days(days) => Ok(*days),
            Duration::Window { pickup, return_at } => {
                Ok(BookingWindow::parse(pickup, return_at)?.rental_days())
            }
        }
    }
}

pub fn run(
    config: &AppConfig,
    vehicle_id: &str,
    duration: Duration,
    addon_ids: Vec<String>,
    coupon: Option<String>,
    json: bool,
) -> Result<()> {
    let catalog = Catalog::sample();
    let calculator = PriceCalculator::new(&catalog, &config.pricing);

    let breakdown = calculator.quote(&QuoteRequest {
        vehicle_id: vehicle_id.to_string(),
        days: duration.days()?,
        addon_ids,
        coupon,
    })?;

    if json {
        println!("{}", breakdown.to_json_pretty()?);
        return Ok(());
    }

    let symbol = config.pricing.currency_symbol.as_str();
    let amount = |value: u64| format_amount(symbol, value);

    println!("{}\n", breakdown.vehicle_name);
    println!(
        "  {:<28} {:>10}",
        format!("{} day(s) × {}", breakdown.days, amount(breakdown.daily_rate)),
        amount(breakdown.rental)
    );
    for addon in &breakdown.addons {
        println!("  {:<28} {:>10}", addon.name, amount(addon.price));
    }
    println!("  {:<28} {:>10}", "Platform fee", amount(breakdown.platform_fee));
    println!("  {:<28} {:>10}", "Subtotal", amount(breakdown.totals.subtotal));
    println!(
        "  {:<28} {:>10}",
        format!("GST {}", breakdown.tax_rate),
        amount(breakdown.totals.tax)
    );
    println!("  {:<28} {:>10}", "Total", amount(breakdown.totals.total));
    if let Some(code) = &breakdown.coupon {
        println!(
            "  {:<28} {:>10}",
            format!("Coupon {}", code),
            format!("-{}", amount(breakdown.totals.discount))
        );
    }
    println!("  {:<28} {:>10}", "Payable", amount(breakdown.totals.final_amount));

    Ok(())
}
