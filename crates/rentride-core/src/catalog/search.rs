//! Client-side filtering and sorting for the explore, help and inbox screens.

use std::cmp::Ordering;
use std::str::FromStr;

use super::models::{FaqEntry, InboxMessage, Vehicle, VehicleCategory};

/// Case-insensitive substring match; an empty needle matches everything
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

fn normalize(text: Option<&str>) -> String {
    text.map(|t| t.trim().to_lowercase()).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleSort {
    /// Catalog order
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Rating,
    Name,
}

impl FromStr for VehicleSort {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "featured" => Ok(VehicleSort::Featured),
            "price" | "price-asc" => Ok(VehicleSort::PriceAsc),
            "price-desc" => Ok(VehicleSort::PriceDesc),
            "rating" => Ok(VehicleSort::Rating),
            "name" => Ok(VehicleSort::Name),
            other => Err(crate::Error::Other(format!("Unknown sort order: {}", other))),
        }
    }
}

/// Vehicle search filters
#[derive(Debug, Clone, Default)]
pub struct VehicleQuery {
    pub text: Option<String>,
    pub category: Option<VehicleCategory>,
    pub max_rate: Option<u64>,
    pub min_seats: Option<u8>,
    pub sort: VehicleSort,
}

impl VehicleQuery {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let needle = normalize(self.text.as_deref());
        let text_ok = contains_ci(&vehicle.name, &needle)
            || contains_ci(&vehicle.brand, &needle)
            || contains_ci(&vehicle.city, &needle);

        text_ok
            && self.category.map_or(true, |c| vehicle.category == c)
            && self.max_rate.map_or(true, |max| vehicle.daily_rate <= max)
            && self.min_seats.map_or(true, |min| vehicle.seats >= min)
    }

    /// Filter then sort; equal keys keep catalog order
    pub fn apply<'a>(&self, vehicles: &'a [Vehicle]) -> Vec<&'a Vehicle> {
        let mut result: Vec<&Vehicle> = vehicles.iter().filter(|v| self.matches(v)).collect();

        match self.sort {
            VehicleSort::Featured => {}
            VehicleSort::PriceAsc => result.sort_by_key(|v| v.daily_rate),
            VehicleSort::PriceDesc => result.sort_by(|a, b| b.daily_rate.cmp(&a.daily_rate)),
            VehicleSort::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            VehicleSort::Name => result.sort_by(|a, b| {
                a.display_name()
                    .to_lowercase()
                    .cmp(&b.display_name().to_lowercase())
            }),
        }

        result
    }
}

/// FAQ search: question hits rank before answer-only hits
#[derive(Debug, Clone, Default)]
pub struct FaqQuery {
    pub text: Option<String>,
    pub topic: Option<String>,
}

impl FaqQuery {
    pub fn apply<'a>(&self, entries: &'a [FaqEntry]) -> Vec<&'a FaqEntry> {
        let needle = normalize(self.text.as_deref());
        let topic = normalize(self.topic.as_deref());

        let mut ranked: Vec<(u8, &FaqEntry)> = entries
            .iter()
            .filter(|e| topic.is_empty() || e.topic.eq_ignore_ascii_case(&topic))
            .filter_map(|e| {
                if contains_ci(&e.question, &needle) {
                    Some((0, e))
                } else if contains_ci(&e.answer, &needle) {
                    Some((1, e))
                } else {
                    None
                }
            })
            .collect();

        ranked.sort_by_key(|(rank, _)| *rank);
        ranked.into_iter().map(|(_, e)| e).collect()
    }
}

/// Inbox filter, newest message first
#[derive(Debug, Clone, Default)]
pub struct InboxQuery {
    pub unread_only: bool,
    pub text: Option<String>,
}

impl InboxQuery {
    pub fn apply<'a>(&self, messages: &'a [InboxMessage]) -> Vec<&'a InboxMessage> {
        let needle = normalize(self.text.as_deref());

        let mut result: Vec<&InboxMessage> = messages
            .iter()
            .filter(|m| !self.unread_only || m.unread)
            .filter(|m| {
                contains_ci(&m.sender, &needle)
                    || contains_ci(&m.subject, &needle)
                    || contains_ci(&m.body, &needle)
            })
            .collect();

        result.sort_by(|a, b| match b.sent_at.cmp(&a.sent_at) {
            Ordering::Equal => a.id.cmp(&b.id),
            other => other,
        });
        result
    }
}
