use crate::core::rates::{RateTable, STANDARD_RATES};
use crate::domain::model::{Duration, Quote, Selection};

/// Discount rules for the all-inclusive bundle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundleRules {
    /// Percentage taken off the summed price, e.g. `12.0` for 12%.
    pub discount_percent: f64,
    /// Fixed price of the 3-month bundle. Overrides the percentage.
    pub three_month_flat_price: f64,
}

pub const STANDARD_BUNDLE: BundleRules = BundleRules {
    discount_percent: 12.0,
    three_month_flat_price: 11500.0,
};

impl Default for BundleRules {
    fn default() -> Self {
        STANDARD_BUNDLE
    }
}

/// Turns a selection and a duration into a [`Quote`].
///
/// The engine owns no mutable state; identical inputs always produce
/// bit-identical quotes, so callers may memoize freely.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PricingEngine {
    rates: RateTable,
    bundle: BundleRules,
}

impl PricingEngine {
    pub const fn new(rates: RateTable, bundle: BundleRules) -> Self {
        Self { rates, bundle }
    }

    pub const fn standard() -> Self {
        Self::new(STANDARD_RATES, STANDARD_BUNDLE)
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn quote(&self, selection: &Selection, duration: Duration) -> Quote {
        let original_price: f64 = selection
            .services()
            .map(|service| f64::from(self.rates.base_price(service, duration)))
            .sum();

        let is_all_inclusive = selection.is_all_inclusive();

        let (final_price, discount) = if !is_all_inclusive {
            (original_price, 0.0)
        } else if duration == Duration::ThreeMonths {
            // Flat price; the difference is reported as-is, even if negative.
            let flat = self.bundle.three_month_flat_price;
            (flat, original_price - flat)
        } else {
            let discount = original_price * self.bundle.discount_percent / 100.0;
            (original_price - discount, discount)
        };

        Quote {
            original_price,
            final_price,
            discount,
            is_all_inclusive,
            is_best_value: duration.is_best_value(),
        }
    }
}

/// Quote with the standard rate table and bundle rules.
pub fn quote(selection: &Selection, duration: Duration) -> Quote {
    PricingEngine::standard().quote(selection, duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Service;

    #[test]
    fn test_empty_selection_is_all_zero() {
        for duration in Duration::ALL {
            let q = quote(&Selection::none(), duration);
            assert_eq!(q.original_price, 0.0);
            assert_eq!(q.final_price, 0.0);
            assert_eq!(q.discount, 0.0);
            assert!(!q.is_all_inclusive);
        }
    }

    #[test]
    fn test_one_month_bundle_gets_percentage_discount() {
        let q = quote(&Selection::all(), Duration::OneMonth);
        assert_eq!(q.original_price, 6000.0);
        assert_eq!(q.discount, 720.0);
        assert_eq!(q.final_price, 5280.0);
        assert!(q.is_all_inclusive);
        assert!(!q.is_best_value);
    }

    #[test]
    fn test_three_month_bundle_is_flat_priced() {
        let q = quote(&Selection::all(), Duration::ThreeMonths);
        assert_eq!(q.original_price, 13000.0);
        assert_eq!(q.final_price, 11500.0);
        assert_eq!(q.discount, 1500.0);
    }

    #[test]
    fn test_long_bundles_get_percentage_discount() {
        let six = quote(&Selection::all(), Duration::SixMonths);
        assert_eq!(six.original_price, 18500.0);
        assert_eq!(six.discount, 2220.0);
        assert_eq!(six.final_price, 16280.0);

        let twelve = quote(&Selection::all(), Duration::TwelveMonths);
        assert_eq!(twelve.original_price, 28000.0);
        assert_eq!(twelve.discount, 3360.0);
        assert_eq!(twelve.final_price, 24640.0);
    }

    #[test]
    fn test_gym_only_is_priced_without_discount() {
        let q = quote(&Selection::of(&[Service::Gym]), Duration::TwelveMonths);
        assert_eq!(q.original_price, 12000.0);
        assert_eq!(q.final_price, 12000.0);
        assert_eq!(q.discount, 0.0);
        assert!(q.is_best_value);
    }

    #[test]
    fn test_partial_bundle_gets_no_discount() {
        let q = quote(&Selection::new(true, true, false), Duration::SixMonths);
        assert_eq!(q.original_price, 13500.0);
        assert_eq!(q.discount, 0.0);
        assert!(q.is_best_value);
        assert!(!q.is_all_inclusive);
    }

    #[test]
    fn test_flat_price_above_sum_is_not_clamped() {
        let cheap = RateTable::new([
            [1000, 2000, 3000, 4000],
            [1000, 2000, 3000, 4000],
            [1000, 2000, 3000, 4000],
        ]);
        let engine = PricingEngine::new(cheap, STANDARD_BUNDLE);
        let q = engine.quote(&Selection::all(), Duration::ThreeMonths);
        assert_eq!(q.original_price, 6000.0);
        assert_eq!(q.final_price, 11500.0);
        assert_eq!(q.discount, -5500.0);
    }

    #[test]
    fn test_engine_does_not_round() {
        let odd = RateTable::new([[1001, 0, 0, 0], [1000, 0, 0, 0], [1000, 0, 0, 0]]);
        let engine = PricingEngine::new(odd, STANDARD_BUNDLE);
        let q = engine.quote(&Selection::all(), Duration::OneMonth);
        assert!((q.discount - 360.12).abs() < 1e-9);
        assert!((q.final_price - 2640.88).abs() < 1e-9);
        assert_ne!(q.final_price, q.final_price.round());
    }
}
