//! Percentage helpers shared by the summary computations
//!
//! Results are raw `f64` percentages. Nothing is rounded or clamped here;
//! that is left to whoever renders them.

use crate::models::Money;

/// `part / whole * 100` with no zero guard; callers decide what a zero
/// denominator means.
///
/// Multiplies before dividing so exact inputs give exact outputs
/// (700 of 1000 is 70.0, not 69.99999999999999).
pub(crate) fn percent_of(part: Money, whole: Money) -> f64 {
    (part.cents() as f64 * 100.0) / whole.cents() as f64
}

/// Percent change from `previous` to `current`
///
/// When `previous` is zero there is nothing to divide by: any positive
/// `current` reports 100 ("new money appeared"), otherwise 0.
pub fn percent_change(current: Money, previous: Money) -> f64 {
    if !previous.is_zero() {
        percent_of(current - previous, previous)
    } else if current.is_positive() {
        100.0
    } else {
        0.0
    }
}

/// Share of income left after expenses, as a percent; 0 without income
///
/// Negative when expenses exceed income.
pub fn savings_rate(income: Money, expenses: Money) -> f64 {
    if income.is_positive() {
        percent_of(income - expenses, income)
    } else {
        0.0
    }
}
