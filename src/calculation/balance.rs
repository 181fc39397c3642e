//! Balance reconciliation for a leave request.
//!
//! Exceeding the remaining balance is advisory only. The HR API is the
//! authority on whether a request is accepted, so nothing here blocks a
//! submission.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns true if a request would take more days than remain.
///
/// # Example
///
/// ```
/// use holiday_engine::calculation::would_exceed_balance;
/// use rust_decimal::Decimal;
///
/// assert!(would_exceed_balance(Decimal::new(5, 0), Decimal::new(3, 0)));
/// assert!(!would_exceed_balance(Decimal::new(3, 0), Decimal::new(3, 0)));
/// ```
pub fn would_exceed_balance(effective_days: Decimal, remaining_balance: Decimal) -> bool {
    effective_days > remaining_balance
}

/// The balance position after a prospective request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceCheck {
    /// Days remaining before the request.
    pub remaining_before: Decimal,
    /// Days the request would charge.
    pub requested: Decimal,
    /// Days remaining after the request; negative when overdrawn.
    pub remaining_after: Decimal,
    /// Whether the request exceeds the remaining balance.
    pub exceeds: bool,
}

/// Reconciles a request against the remaining balance.
///
/// Leave types that do not count against the balance charge nothing and
/// never exceed it.
pub fn check_balance(
    effective_days: Decimal,
    remaining_balance: Decimal,
    counts_against_balance: bool,
) -> BalanceCheck {
    let requested = if counts_against_balance {
        effective_days
    } else {
        Decimal::ZERO
    };

    BalanceCheck {
        remaining_before: remaining_balance,
        requested,
        remaining_after: remaining_balance - requested,
        exceeds: would_exceed_balance(requested, remaining_balance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_exceeds_when_request_larger() {
        assert!(would_exceed_balance(dec("5"), dec("3.0")));
        assert!(would_exceed_balance(dec("0.5"), dec("0")));
    }

    #[test]
    fn test_exact_balance_does_not_exceed() {
        assert!(!would_exceed_balance(dec("2.5"), dec("2.5")));
    }

    #[test]
    fn test_negative_balance() {
        assert!(would_exceed_balance(dec("0.5"), dec("-1")));
    }

    #[test]
    fn test_check_balance_overdrawn() {
        let check = check_balance(dec("5"), dec("3"), true);
        assert!(check.exceeds);
        assert_eq!(check.requested, dec("5"));
        assert_eq!(check.remaining_after, dec("-2"));
    }

    #[test]
    fn test_check_balance_within() {
        let check = check_balance(dec("1.5"), dec("10"), true);
        assert!(!check.exceeds);
        assert_eq!(check.remaining_after, dec("8.5"));
    }

    #[test]
    fn test_non_deducting_leave_never_exceeds() {
        let check = check_balance(dec("5"), dec("0"), false);
        assert!(!check.exceeds);
        assert_eq!(check.requested, Decimal::ZERO);
        assert_eq!(check.remaining_after, Decimal::ZERO);
    }
}
