//! Amount allocation over integer subunits.
//!
//! Allocation never creates or loses a subunit: the parts always sum to the
//! original subunit count.
//!
//! The method works by:
//! 1. Computing each recipient's exact share `total * ratio / sum`
//! 2. Truncating each share toward zero
//! 3. Handing the leftover subunits, one each, to recipients in index order
//!
//! Recipients with a zero ratio never receive a leftover subunit.

use moneta_shared::{MoneyError, MoneyResult};
use tracing::debug;

use crate::money::Money;

/// Allocation utility for distributing subunit counts.
///
/// Guarantees:
/// - Sum of allocations EXACTLY equals the total
/// - Every allocation is within one subunit of its exact share
/// - Earlier recipients are served first
pub struct AllocationUtil;

impl AllocationUtil {
    /// Split `total` subunits equally across `count` recipients.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `count` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::currency::AllocationUtil;
    ///
    /// // 10000 / 3 = [3334, 3333, 3333]
    /// let parts = AllocationUtil::allocate_equal(10_000, 3).unwrap();
    /// assert_eq!(parts, vec![3334, 3333, 3333]);
    /// ```
    pub fn allocate_equal(total: i64, count: usize) -> MoneyResult<Vec<i64>> {
        if count == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        Self::allocate_by_ratios(total, &vec![1; count])
    }

    /// Split `total` subunits proportionally to `ratios`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `ratios` is empty or sums to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use moneta_core::currency::AllocationUtil;
    ///
    /// // 100 split 70/30
    /// let parts = AllocationUtil::allocate_by_ratios(100, &[70, 30]).unwrap();
    /// assert_eq!(parts, vec![70, 30]);
    /// ```
    pub fn allocate_by_ratios(total: i64, ratios: &[u32]) -> MoneyResult<Vec<i64>> {
        let ratio_sum: u64 = ratios.iter().map(|r| u64::from(*r)).sum();
        if ratio_sum == 0 {
            return Err(MoneyError::DivisionByZero);
        }

        let total_wide = i128::from(total);
        let ratio_sum = i128::from(ratio_sum);

        // |total * ratio / sum| <= |total|, so every share fits back into i64
        let mut shares = ratios
            .iter()
            .map(|r| i64::try_from(total_wide * i128::from(*r) / ratio_sum))
            .collect::<Result<Vec<i64>, _>>()
            .map_err(|_| MoneyError::Overflow)?;

        let allocated: i128 = shares.iter().map(|s| i128::from(*s)).sum();
        let mut leftover = total_wide - allocated;
        let step: i64 = if leftover < 0 { -1 } else { 1 };

        // |leftover| is below the number of non-zero ratios, one pass suffices
        for (share, ratio) in shares.iter_mut().zip(ratios) {
            if leftover == 0 {
                break;
            }
            if *ratio == 0 {
                continue;
            }
            *share += step;
            leftover -= i128::from(step);
        }

        Ok(shares)
    }
}

impl Money {
    /// Splits this amount into `recipients` equal parts.
    ///
    /// Parts differ by at most one subunit, earlier parts taking the extra.
    ///
    /// ```
    /// use moneta_core::Money;
    ///
    /// let parts = Money::from_amount("0.05").allocate_to(2).unwrap();
    /// assert_eq!(parts[0].to_string(), "0.03 USD");
    /// assert_eq!(parts[1].to_string(), "0.02 USD");
    /// ```
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for zero recipients, `InvalidAmount` for the
    /// not-a-number sentinel.
    pub fn allocate_to(&self, recipients: usize) -> MoneyResult<Vec<Self>> {
        if recipients == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        self.allocate_by_ratios(&vec![1; recipients])
    }

    /// Splits this amount proportionally to `ratios`.
    ///
    /// Works on [`Money::amount_in_subunits`], so an amount finer than the
    /// currency's subunit is rounded half-up before splitting.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for empty or all-zero ratios, `InvalidAmount` for
    /// the not-a-number sentinel.
    pub fn allocate_by_ratios(&self, ratios: &[u32]) -> MoneyResult<Vec<Self>> {
        let total = self.amount_in_subunits()?;
        let shares = AllocationUtil::allocate_by_ratios(total, ratios)?;

        debug!(
            currency = %self.currency(),
            total_subunits = total,
            recipients = shares.len(),
            "allocated amount"
        );

        Ok(shares
            .into_iter()
            .map(|subunits| Self::from_subunits(subunits, self.currency()))
            .collect())
    }
}
