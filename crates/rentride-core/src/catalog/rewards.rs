use super::models::RewardTier;

/// Where a points balance sits on the reward ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardStatus<'a> {
    pub points: u32,
    pub tier: Option<&'a RewardTier>,
    pub next: Option<&'a RewardTier>,
}

impl<'a> RewardStatus<'a> {
    /// Resolve the highest tier whose minimum is met, and the one after it
    pub fn for_points(tiers: &'a [RewardTier], points: u32) -> Self {
        let mut sorted: Vec<&RewardTier> = tiers.iter().collect();
        sorted.sort_by_key(|t| t.min_points);

        let tier = sorted.iter().rev().find(|t| t.min_points <= points).copied();
        let next = sorted.iter().find(|t| t.min_points > points).copied();

        Self { points, tier, next }
    }

    /// Points missing to reach the next tier, `None` at the top
    pub fn points_to_next(&self) -> Option<u32> {
        self.next.map(|t| t.min_points - self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_tier_lookup() {
        let catalog = Catalog::sample();

        let status = RewardStatus::for_points(&catalog.reward_tiers, 0);
        assert_eq!(status.tier.unwrap().name, "Bronze");
        assert_eq!(status.points_to_next(), Some(500));

        let status = RewardStatus::for_points(&catalog.reward_tiers, 500);
        assert_eq!(status.tier.unwrap().name, "Silver");
        assert_eq!(status.next.unwrap().name, "Gold");
        assert_eq!(status.points_to_next(), Some(1000));

        let status = RewardStatus::for_points(&catalog.reward_tiers, 9000);
        assert_eq!(status.tier.unwrap().name, "Platinum");
        assert_eq!(status.points_to_next(), None);
    }

    #[test]
    fn test_no_tier_below_minimum() {
        let tiers = vec![RewardTier {
            name: "Gold".to_string(),
            min_points: 100,
            perk: String::new(),
        }];
        let status = RewardStatus::for_points(&tiers, 40);
        assert!(status.tier.is_none());
        assert_eq!(status.points_to_next(), Some(60));
    }
}
