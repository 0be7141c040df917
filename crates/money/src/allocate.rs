//! Minor-unit allocation using the largest remainder method.
//!
//! Splitting works on integer minor units directly, so the shares always sum
//! back to the original amount exactly. No minor unit is lost or invented.

use crate::error::{MoneyError, MoneyResult};

/// Split `amount` minor units by `ratios`.
///
/// Each share gets `floor(amount * ratio / total)` and the remaining units
/// (always fewer than the number of non-zero ratios) are handed out one per
/// weighted share, starting from the first. Zero-weight shares never receive
/// a unit. Negative amounts distribute the remainder with the same rule,
/// mirrored in sign.
pub(crate) fn allocate_minor(amount: i128, ratios: &[u32]) -> MoneyResult<Vec<i128>> {
    if ratios.is_empty() {
        return Err(MoneyError::invalid_ratios("ratio list is empty"));
    }

    let total: i128 = ratios.iter().map(|r| i128::from(*r)).sum();
    if total == 0 {
        return Err(MoneyError::invalid_ratios("ratios sum to zero"));
    }

    let mut shares = Vec::with_capacity(ratios.len());
    let mut allocated: i128 = 0;
    for ratio in ratios {
        let share = amount
            .checked_mul(i128::from(*ratio))
            .ok_or(MoneyError::AmountOverflow)?
            / total;
        allocated += share;
        shares.push(share);
    }

    // Truncating division leaves fewer leftover units than there are
    // non-zero ratios; only weighted shares take part in distribution.
    let mut remainder = amount - allocated;
    let step = remainder.signum();
    for (share, ratio) in shares.iter_mut().zip(ratios) {
        if remainder == 0 {
            break;
        }
        if *ratio == 0 {
            continue;
        }
        *share += step;
        remainder -= step;
    }

    Ok(shares)
}
