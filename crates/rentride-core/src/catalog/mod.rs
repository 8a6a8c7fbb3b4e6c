pub mod models;
pub mod rewards;
pub mod sample;
pub mod search;

pub use models::{
    Addon, Coupon, FaqEntry, FuelType, InboxMessage, RewardTier, Transmission, Vehicle,
    VehicleCategory,
};
pub use rewards::RewardStatus;
pub use search::{FaqQuery, InboxQuery, VehicleQuery, VehicleSort};

use crate::{Error, Result};

/// In-memory catalog backing every screen
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub vehicles: Vec<Vehicle>,
    pub addons: Vec<Addon>,
    pub coupons: Vec<Coupon>,
    pub faqs: Vec<FaqEntry>,
    pub messages: Vec<InboxMessage>,
    pub reward_tiers: Vec<RewardTier>,
}

impl Catalog {
    /// Catalog populated with the built-in sample data
    pub fn sample() -> Self {
        Self {
            vehicles: sample::vehicles(),
            addons: sample::addons(),
            coupons: sample::coupons(),
            faqs: sample::faqs(),
            messages: sample::messages(),
            reward_tiers: sample::reward_tiers(),
        }
    }

    pub fn vehicle(&self, id: &str) -> Result<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| Error::VehicleNotFound(id.to_string()))
    }

    pub fn addon(&self, id: &str) -> Result<&Addon> {
        self.addons
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::UnknownAddon(id.to_string()))
    }

    /// Coupon codes are matched case-insensitively
    pub fn coupon(&self, code: &str) -> Result<&Coupon> {
        let code = code.trim();
        self.coupons
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnknownCoupon(code.to_string()))
    }

    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| m.unread).count()
    }
}
