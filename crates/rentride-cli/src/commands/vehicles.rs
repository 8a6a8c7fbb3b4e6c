use anyhow::Result;

use rentride_core::catalog::{Catalog, VehicleCategory, VehicleQuery, VehicleSort};
use rentride_core::pricing::format_amount;
use rentride_core::AppConfig;

pub struct Filters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub max_rate: Option<u64>,
    pub min_seats: Option<u8>,
    pub sort: String,
}

pub fn run(config: &AppConfig, filters: Filters, json: bool) -> Result<()> {
    let query = VehicleQuery {
        text: filters.search,
        category: filters
            .category
            .as_deref()
            .map(str::parse::<VehicleCategory>)
            .transpose()?,
        max_rate: filters.max_rate,
        min_seats: filters.min_seats,
        sort: filters.sort.parse::<VehicleSort>()?,
    };

    let catalog = Catalog::sample();
    let vehicles = query.apply(&catalog.vehicles);
    tracing::debug!(count = vehicles.len(), "Vehicle search");

    if json {
        println!("{}", serde_json::to_string_pretty(&vehicles)?);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("No vehicles match these filters.");
        return Ok(());
    }

    println!("Vehicles ({}):\n", vehicles.len());
    for v in vehicles {
        println!(
            "  {:<10} {:<22} {:<11} {} seats  {:>8}/day  ★{:.1}  {}",
            v.id,
            v.display_name(),
            v.category.as_str(),
            v.seats,
            format_amount(&config.pricing.currency_symbol, v.daily_rate),
            v.rating,
            v.city
        );
    }

    Ok(())
}
