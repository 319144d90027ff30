//! Property-based tests for allocation and conversion.
//!
//! - Allocation: parts sum to the original, stay within one subunit of the
//!   exact share, and hand leftovers out in index order
//! - Conversion: results land on the target subunit and are deterministic

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::allocation::AllocationUtil;
use super::conversion::convert_amount;
use super::registry::lookup_by_code;
use crate::money::Money;
use moneta_shared::Rounding;

/// Strategy to generate signed cent amounts (-1,000,000.00 to 1,000,000.00).
fn cents() -> impl Strategy<Value = i64> {
    -100_000_000i64..100_000_000i64
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate ratio lists with at least one non-zero weight.
fn weights() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..1000, 1..12).prop_filter("needs a non-zero ratio", |r| {
        r.iter().any(|w| *w > 0)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* total and count, equal parts sum exactly to the total.
    #[test]
    fn prop_allocate_equal_sum_invariant(total in cents(), count in 1usize..100) {
        let parts = AllocationUtil::allocate_equal(total, count).unwrap();
        prop_assert_eq!(parts.len(), count);
        prop_assert_eq!(parts.iter().sum::<i64>(), total);
    }

    /// *For any* total and count, no two equal parts differ by more than one.
    #[test]
    fn prop_allocate_equal_bounded_spread(total in cents(), count in 1usize..100) {
        let parts = AllocationUtil::allocate_equal(total, count).unwrap();
        let max = parts.iter().max().copied().unwrap();
        let min = parts.iter().min().copied().unwrap();
        prop_assert!(max - min <= 1, "spread {} too wide in {:?}", max - min, parts);
    }

    /// *For any* total and count, larger parts come first.
    #[test]
    fn prop_allocate_equal_leftover_goes_first(total in cents(), count in 1usize..100) {
        let parts = AllocationUtil::allocate_equal(total, count).unwrap();
        let magnitudes: Vec<u64> = parts.iter().map(|p| p.unsigned_abs()).collect();
        prop_assert!(magnitudes.windows(2).all(|w| w[0] >= w[1]));
    }

    /// *For any* total and ratios, parts sum exactly to the total.
    #[test]
    fn prop_allocate_by_ratios_sum_invariant(total in cents(), ratios in weights()) {
        let parts = AllocationUtil::allocate_by_ratios(total, &ratios).unwrap();
        prop_assert_eq!(parts.len(), ratios.len());
        prop_assert_eq!(parts.iter().sum::<i64>(), total);
    }

    /// *For any* total and ratios, each part is within one subunit of its
    /// exact share `total * ratio / sum`.
    #[test]
    fn prop_allocate_by_ratios_bounded_imbalance(total in cents(), ratios in weights()) {
        let parts = AllocationUtil::allocate_by_ratios(total, &ratios).unwrap();
        let sum: i128 = ratios.iter().map(|r| i128::from(*r)).sum();
        for (part, ratio) in parts.iter().zip(&ratios) {
            // |part - total*ratio/sum| <= 1  <=>  |part*sum - total*ratio| <= sum
            let scaled = i128::from(*part) * sum - i128::from(total) * i128::from(*ratio);
            prop_assert!(scaled.abs() <= sum, "part {} too far from share", part);
        }
    }

    /// *For any* money and count, the Money parts sum back to the original.
    #[test]
    fn prop_money_allocation_sums_to_original(total in cents(), count in 1usize..50) {
        let money = Money::new(Decimal::new(total, 2), lookup_by_code("USD").unwrap());
        let parts = money.allocate_to(count).unwrap();
        let sum = Money::sum(money.currency(), &parts).unwrap();
        prop_assert_eq!(sum, money);
    }

    /// *For any* amount and rate, a conversion result has at most the target
    /// exponent's decimal places.
    #[test]
    fn prop_convert_lands_on_subunit(
        total in cents(),
        rate in positive_rate(),
        exponent in 0u32..=3,
    ) {
        let amount = Decimal::new(total, 2);
        let result = convert_amount(amount, rate, exponent, Rounding::HalfUp).unwrap();
        prop_assert!(result.scale() <= exponent, "{} has too many places", result);
    }

    /// *For any* amount and rate, conversion is deterministic.
    #[test]
    fn prop_convert_is_deterministic(total in cents(), rate in positive_rate()) {
        let amount = Decimal::new(total, 2);
        let first = convert_amount(amount, rate, 2, Rounding::HalfUp).unwrap();
        let second = convert_amount(amount, rate, 2, Rounding::HalfUp).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* amount and rate, half-up differs from the exact product by at
    /// most half a subunit.
    #[test]
    fn prop_convert_error_within_half_subunit(total in cents(), rate in positive_rate()) {
        let amount = Decimal::new(total, 2);
        let exact = amount * rate;
        let rounded = convert_amount(amount, rate, 2, Rounding::HalfUp).unwrap();
        prop_assert!((rounded - exact).abs() <= Decimal::new(5, 3));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Specific example: 100.00/3 = [33.34, 33.33, 33.33].
    #[test]
    fn test_allocate_equal_100_by_3() {
        let money = Money::new(dec!(100), lookup_by_code("USD").unwrap());
        let parts = money.allocate_to(3).unwrap();
        assert_eq!(parts[0].value().unwrap(), dec!(33.34));
        assert_eq!(parts[1].value().unwrap(), dec!(33.33));
        assert_eq!(parts[2].value().unwrap(), dec!(33.33));
    }

    /// Specific example: 0.01/3 = [0.01, 0.00, 0.00].
    #[test]
    fn test_allocate_equal_penny_by_3() {
        let money = Money::new(dec!(0.01), lookup_by_code("USD").unwrap());
        let parts = money.allocate_to(3).unwrap();
        assert_eq!(parts[0].value().unwrap(), dec!(0.01));
        assert!(parts[1].is_zero());
        assert!(parts[2].is_zero());
    }
}
