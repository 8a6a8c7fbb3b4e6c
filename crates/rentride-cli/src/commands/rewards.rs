use anyhow::Result;

use rentride_core::catalog::{Catalog, RewardStatus};

pub fn run(points: u32) -> Result<()> {
    let catalog = Catalog::sample();
    let status = RewardStatus::for_points(&catalog.reward_tiers, points);

    match status.tier {
        Some(tier) => println!("{} points: {} tier ({})", points, tier.name, tier.perk),
        None => println!("{} points: no tier yet", points),
    }

    match (status.next, status.points_to_next()) {
        (Some(next), Some(missing)) => {
            println!("{} more points to reach {}", missing, next.name)
        }
        _ => println!("You are at the top tier."),
    }

    println!("\nTiers:");
    for tier in &catalog.reward_tiers {
        let marker = if status.tier.is_some_and(|t| t.name == tier.name) {
            "*"
        } else {
            " "
        };
        println!("  {} {:<10} {:>6} pts  {}", marker, tier.name, tier.min_points, tier.perk);
    }

    Ok(())
}
