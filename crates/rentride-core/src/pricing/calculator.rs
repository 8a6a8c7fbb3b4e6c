use super::models::{AddonLine, PriceBreakdown, PriceTotals, TaxRate};
use crate::catalog::{Catalog, Vehicle};
use crate::config::PricingConfig;
use crate::{Error, Result};

/// Booking price formula
///
/// `subtotal = days × rate + Σ addons + platform_fee`, tax is rounded half up
/// on the subtotal, and the discount can bring the final amount down to zero
/// but never below.
pub fn compute_total(
    days: u32,
    rate: u64,
    addon_prices: &[u64],
    platform_fee: u64,
    tax_rate: TaxRate,
    discount: u64,
) -> PriceTotals {
    let rental = rate.saturating_mul(days as u64);
    let addons = addon_prices
        .iter()
        .fold(0u64, |acc, price| acc.saturating_add(*price));
    let subtotal = rental.saturating_add(addons).saturating_add(platform_fee);
    let tax = tax_rate.apply(subtotal);
    let total = subtotal.saturating_add(tax);
    let final_amount = total.saturating_sub(discount);

    PriceTotals {
        subtotal,
        tax,
        total,
        discount: total - final_amount,
        final_amount,
    }
}

/// What the user picked on the booking screen
#[derive(Debug, Clone, Default)]
pub struct QuoteRequest {
    pub vehicle_id: String,
    pub days: u32,
    pub addon_ids: Vec<String>,
    pub coupon: Option<String>,
}

/// Resolves a booking selection against the catalog and prices it
pub struct PriceCalculator<'a> {
    catalog: &'a Catalog,
    platform_fee: u64,
    tax_rate: TaxRate,
}

impl<'a> PriceCalculator<'a> {
    pub fn new(catalog: &'a Catalog, config: &PricingConfig) -> Self {
        Self {
            catalog,
            platform_fee: config.platform_fee,
            tax_rate: TaxRate::from_bps(config.tax_rate_bps),
        }
    }

    pub fn quote(&self, request: &QuoteRequest) -> Result<PriceBreakdown> {
        let vehicle = self.catalog.vehicle(&request.vehicle_id)?;
        self.quote_vehicle(vehicle, request.days, &request.addon_ids, request.coupon.as_deref())
    }

    pub fn quote_vehicle(
        &self,
        vehicle: &Vehicle,
        days: u32,
        addon_ids: &[String],
        coupon_code: Option<&str>,
    ) -> Result<PriceBreakdown> {
        let addons = addon_ids
            .iter()
            .map(|id| {
                self.catalog.addon(id).map(|a| AddonLine {
                    id: a.id.clone(),
                    name: a.name.clone(),
                    price: a.price,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let addon_prices: Vec<u64> = addons.iter().map(|a| a.price).collect();

        let undiscounted = compute_total(
            days,
            vehicle.daily_rate,
            &addon_prices,
            self.platform_fee,
            self.tax_rate,
            0,
        );

        let (coupon, discount) = match coupon_code {
            Some(code) => {
                let coupon = self.catalog.coupon(code)?;
                if undiscounted.total < coupon.min_total {
                    return Err(Error::CouponNotApplicable {
                        code: coupon.code.clone(),
                        min_total: coupon.min_total,
                    });
                }
                (Some(coupon.code.clone()), coupon.discount)
            }
            None => (None, 0),
        };

        let totals = compute_total(
            days,
            vehicle.daily_rate,
            &addon_prices,
            self.platform_fee,
            self.tax_rate,
            discount,
        );

        tracing::debug!(
            vehicle = %vehicle.id,
            days,
            final_amount = totals.final_amount,
            "Priced booking"
        );

        Ok(PriceBreakdown {
            vehicle_id: vehicle.id.clone(),
            vehicle_name: vehicle.display_name(),
            days,
            daily_rate: vehicle.daily_rate,
            rental: vehicle.daily_rate.saturating_mul(days as u64),
            addons,
            platform_fee: self.platform_fee,
            tax_rate: self.tax_rate,
            coupon,
            totals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GST: TaxRate = TaxRate::from_bps(1800);

    #[test]
    fn test_reference_quote_without_addons() {
        let totals = compute_total(3, 1000, &[], 100, GST, 0);
        assert_eq!(totals.subtotal, 3100);
        assert_eq!(totals.tax, 558);
        assert_eq!(totals.total, 3658);
        assert_eq!(totals.final_amount, 3658);
        assert_eq!(totals.discount, 0);
    }

    #[test]
    fn test_reference_quote_with_addons_and_discount() {
        let totals = compute_total(2, 1500, &[200, 300], 0, GST, 1000);
        assert_eq!(totals.subtotal, 3500);
        assert_eq!(totals.tax, 630);
        assert_eq!(totals.total, 4130);
        assert_eq!(totals.final_amount, 3130);
    }

    #[test]
    fn test_discount_clamps_to_zero() {
        for discount in [4130, 4131, 10_000, u64::MAX] {
            let totals = compute_total(2, 1500, &[200, 300], 0, GST, discount);
            assert_eq!(totals.final_amount, 0);
            assert_eq!(totals.discount, totals.total);
        }
    }

    #[test]
    fn test_huge_subtotal_saturates_tax() {
        let totals = compute_total(1, u64::MAX / 2, &[], 0, TaxRate::from_bps(30_000), 0);
        assert_eq!(totals.subtotal, u64::MAX / 2);
        assert!(totals.tax >= totals.subtotal);
        assert_eq!(totals.total, u64::MAX);
    }

    #[test]
    fn test_zero_days_has_no_rental_component() {
        for rate in [0, 1, 999, 1_000_000] {
            let totals = compute_total(0, rate, &[], 100, GST, 0);
            assert_eq!(totals.subtotal, 100);
            assert_eq!(totals.tax, 18);
            assert_eq!(totals.total, 118);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = compute_total(5, 1234, &[99, 1], 37, TaxRate::from_fraction(0.125), 50);
        let b = compute_total(5, 1234, &[99, 1], 37, TaxRate::from_fraction(0.125), 50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // 5% of 10 = 0.5 -> 1, 5% of 9 = 0.45 -> 0
        assert_eq!(TaxRate::from_bps(500).apply(10), 1);
        assert_eq!(TaxRate::from_bps(500).apply(9), 0);
        assert_eq!(TaxRate::from_fraction(0.18), GST);
        assert_eq!(GST.to_string(), "18%");
        assert_eq!(TaxRate::from_bps(1250).to_string(), "12.50%");
    }

    #[test]
    fn test_quote_from_catalog() {
        let catalog = Catalog::sample();
        let calc = PriceCalculator::new(&catalog, &PricingConfig::default());
        let quote = calc
            .quote(&QuoteRequest {
                vehicle_id: "swift".to_string(),
                days: 3,
                addon_ids: vec!["gps".to_string(), "helmet".to_string()],
                coupon: Some("ride100".to_string()),
            })
            .unwrap();

        // 3 × 1200 + 200 + 100 + fee 100 = 4000, GST 720
        assert_eq!(quote.rental, 3600);
        assert_eq!(quote.addons_total(), 300);
        assert_eq!(quote.totals.subtotal, 4000);
        assert_eq!(quote.totals.tax, 720);
        assert_eq!(quote.totals.total, 4720);
        assert_eq!(quote.totals.final_amount, 4620);
        assert_eq!(quote.coupon.as_deref(), Some("RIDE100"));
    }

    #[test]
    fn test_coupon_minimum_enforced() {
        let catalog = Catalog::sample();
        let calc = PriceCalculator::new(&catalog, &PricingConfig::default());
        let err = calc
            .quote(&QuoteRequest {
                vehicle_id: "activa".to_string(),
                days: 1,
                addon_ids: vec![],
                coupon: Some("WEEKEND1K".to_string()),
            })
            .unwrap_err();
        assert!(matches!(err, Error::CouponNotApplicable { min_total: 4000, .. }));
    }

    #[test]
    fn test_unknown_addon_rejected() {
        let catalog = Catalog::sample();
        let calc = PriceCalculator::new(&catalog, &PricingConfig::default());
        let err = calc
            .quote(&QuoteRequest {
                vehicle_id: "activa".to_string(),
                days: 1,
                addon_ids: vec!["sidecar".to_string()],
                coupon: None,
            })
            .unwrap_err();
        assert!(matches!(err, Error::UnknownAddon(id) if id == "sidecar"));
    }

    #[test]
    fn test_breakdown_serializes_flat_totals() {
        let catalog = Catalog::sample();
        let calc = PriceCalculator::new(&catalog, &PricingConfig::default());
        let quote = calc.quote_vehicle(catalog.vehicle("city").unwrap(), 1, &[], None).unwrap();
        let json: serde_json::Value = serde_json::from_str(&quote.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["final_amount"], 2714);
        assert_eq!(json["tax_rate"], 1800);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The discount never drives the final amount below zero and never
        /// takes off more than the total.
        #[test]
        fn discount_clamped_to_total(
            days in 0u32..400,
            rate in 0u64..1_000_000,
            addons in prop::collection::vec(0u64..100_000, 0..6),
            fee in 0u64..10_000,
            bps in 0u32..50_000,
            discount in any::<u64>(),
        ) {
            let totals = compute_total(days, rate, &addons, fee, TaxRate::from_bps(bps), discount);
            prop_assert!(totals.final_amount <= totals.total);
            prop_assert_eq!(totals.final_amount, totals.total.saturating_sub(discount));
            prop_assert_eq!(totals.discount, discount.min(totals.total));
            prop_assert_eq!(totals.final_amount + totals.discount, totals.total);
        }

        /// Subtotal, tax and total line up for any amounts, including ones
        /// that saturate.
        #[test]
        fn totals_never_wrap(
            days in any::<u32>(),
            rate in any::<u64>(),
            fee in any::<u64>(),
            bps in 0u32..100_000,
        ) {
            let totals = compute_total(days, rate, &[], fee, TaxRate::from_bps(bps), 0);
            prop_assert!(totals.total >= totals.subtotal);
            prop_assert!(totals.total >= totals.tax);
            prop_assert_eq!(totals.total, totals.subtotal.saturating_add(totals.tax));
        }
    }
}
