use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Hatchback,
    Sedan,
    Suv,
    Scooter,
    Motorcycle,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 5] = [
        VehicleCategory::Hatchback,
        VehicleCategory::Sedan,
        VehicleCategory::Suv,
        VehicleCategory::Scooter,
        VehicleCategory::Motorcycle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Hatchback => "hatchback",
            VehicleCategory::Sedan => "sedan",
            VehicleCategory::Suv => "suv",
            VehicleCategory::Scooter => "scooter",
            VehicleCategory::Motorcycle => "motorcycle",
        }
    }

    pub fn is_two_wheeler(&self) -> bool {
        matches!(self, VehicleCategory::Scooter | VehicleCategory::Motorcycle)
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::Error::Other(format!("Unknown vehicle category: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Cng,
}

/// A rentable vehicle listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub category: VehicleCategory,
    pub seats: u8,
    pub transmission: Transmission,
    pub fuel: FuelType,
    /// Price per started day
    pub daily_rate: u64,
    /// Average rating out of 5
    pub rating: f32,
    pub city: String,
}

impl Vehicle {
    /// Brand and model, e.g. "Maruti Swift"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }
}

/// Optional extra that can be attached to a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    pub id: String,
    pub name: String,
    pub price: u64,
}

/// Flat-amount discount code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub description: String,
    pub discount: u64,
    /// Minimum booking total (before discount) for the coupon to apply
    pub min_total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub topic: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxMessage {
    pub id: u32,
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub sent_at: NaiveDateTime,
    pub unread: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTier {
    pub name: String,
    pub min_points: u32,
    pub perk: String,
}
