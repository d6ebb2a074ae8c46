//! # Atomic Counter Operations
//!
//! Lock-free updates of a caller-owned integer cell.
//!
//! ## Two Protocols
//!
//! ```text
//! atomic_add / atomic_subtract        single fetch-and-add, wait-free
//!
//! atomic_multiply / atomic_divide     compare-and-swap retry loop:
//!
//!     current = load(cell)
//!     loop {
//!         candidate = f(current)
//!         if CAS(cell, current -> candidate) { done }
//!         current = value observed by the failed CAS
//!     }
//! ```
//!
//! There is no native atomic multiply or divide. Without the loop, two threads
//! that both read `3` and multiply by `2` would both store `6`: one update
//! lost. With it, exactly one of them swaps; the other sees `6` and stores
//! `12`.
//!
//! ## Known Limitation: No Starvation Freedom
//!
//! The retry loop is lock-free, not wait-free. Under heavy contention a single
//! caller can lose the race an unbounded number of times. Every failed swap
//! means another thread's update succeeded, so the system as a whole always
//! makes progress. Retries are reported as `trace` events.
//!
//! ## Overflow
//!
//! The plain forms wrap. The `_with` forms take an [`OverflowPolicy`]; under
//! `Checked` an overflowing candidate aborts the loop and the cell keeps the
//! value it had.

use axiom_shared::{DomainError, DomainResult, MathError, MathResult, OverflowPolicy};

use crate::cell::{AtomicCounter, CounterValue};

/// Result of one successful compare-and-swap update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CasUpdate<V> {
    /// Value replaced by the successful swap.
    pub previous: V,
    /// Value stored by the successful swap.
    pub stored: V,
    /// Failed swaps before the successful one (contention or spurious).
    pub retries: u64,
}

/// Adds `value` to the cell, wrapping on overflow. Single attempt, wait-free.
#[inline]
pub fn atomic_add<C: AtomicCounter>(cell: &C, value: C::Value) {
    cell.fetch_add_value(value);
}

/// Subtracts `value` from the cell, wrapping on overflow. Single attempt,
/// wait-free.
#[inline]
pub fn atomic_subtract<C: AtomicCounter>(cell: &C, value: C::Value) {
    cell.fetch_sub_value(value);
}

/// Multiplies the cell by `value`, wrapping on overflow.
pub fn atomic_multiply<C: AtomicCounter>(cell: &C, value: C::Value) {
    let update = atomic_update(cell, |current| Some(current.wrapping_mul(value)));
    // The closure never declines, so the update always lands.
    debug_assert!(update.is_some());
}

/// Divides the cell by `value` (truncating), wrapping `MIN / -1` to `MIN`.
///
/// # Errors
///
/// [`DomainError::DivisionByZero`] if `value` is zero. Checked once, before
/// the loop; the cell is not touched.
pub fn atomic_divide<C: AtomicCounter>(cell: &C, value: C::Value) -> DomainResult<()> {
    if value == C::Value::ZERO {
        return Err(DomainError::DivisionByZero);
    }
    let update = atomic_update(cell, |current| Some(current.wrapping_div(value)));
    debug_assert!(update.is_some());
    Ok(())
}

/// Multiplies the cell by `value` under an overflow policy.
///
/// # Errors
///
/// [`MathError::Overflow`] under [`OverflowPolicy::Checked`] if the product
/// does not fit. The cell is left unchanged.
pub fn atomic_multiply_with<C: AtomicCounter>(
    cell: &C,
    value: C::Value,
    policy: OverflowPolicy,
) -> MathResult<()> {
    let update = match policy {
        OverflowPolicy::Wrapping => atomic_update(cell, |current| Some(current.wrapping_mul(value))),
        OverflowPolicy::Checked => atomic_update(cell, |current| current.checked_mul(value)),
        OverflowPolicy::Saturating => {
            atomic_update(cell, |current| Some(current.saturating_mul(value)))
        }
    };
    update.map(|_| ()).ok_or_else(|| overflow("atomic_multiply", cell, value))
}

/// Divides the cell by `value` under an overflow policy.
///
/// The only overflowing quotient is `MIN / -1` on signed cells.
///
/// # Errors
///
/// - [`DomainError::DivisionByZero`] if `value` is zero, before the loop.
/// - [`MathError::Overflow`] under [`OverflowPolicy::Checked`] if the
///   quotient does not fit. The cell is left unchanged.
pub fn atomic_divide_with<C: AtomicCounter>(
    cell: &C,
    value: C::Value,
    policy: OverflowPolicy,
) -> MathResult<()> {
    if value == C::Value::ZERO {
        return Err(DomainError::DivisionByZero.into());
    }
    let update = match policy {
        OverflowPolicy::Wrapping => atomic_update(cell, |current| Some(current.wrapping_div(value))),
        OverflowPolicy::Checked => atomic_update(cell, |current| current.checked_div(value)),
        OverflowPolicy::Saturating => {
            atomic_update(cell, |current| Some(current.saturating_div(value)))
        }
    };
    update.map(|_| ()).ok_or_else(|| overflow("atomic_divide", cell, value))
}

/// Applies `compute` to the cell with a compare-and-swap retry loop.
///
/// `compute` is called with the value last observed in the cell and may be
/// called many times. Returning `None` abandons the update without touching
/// the cell, and `atomic_update` returns `None`.
///
/// Linearizable at the successful swap: the stored value is `compute` applied
/// to exactly the value it replaced.
pub fn atomic_update<C, F>(cell: &C, mut compute: F) -> Option<CasUpdate<C::Value>>
where
    C: AtomicCounter,
    F: FnMut(C::Value) -> Option<C::Value>,
{
    let mut current = cell.load_value();
    let mut retries: u64 = 0;

    loop {
        let candidate = compute(current)?;
        match cell.compare_exchange_weak_value(current, candidate) {
            Ok(previous) => {
                if retries > 0 {
                    tracing::trace!(retries, "compare-and-swap retried");
                }
                return Some(CasUpdate { previous, stored: candidate, retries });
            }
            Err(observed) => {
                current = observed;
                retries = retries.saturating_add(1);
            }
        }
    }
}

fn overflow<C: AtomicCounter>(operation: &'static str, cell: &C, value: C::Value) -> MathError {
    tracing::warn!(operation, cell = %cell.load_value(), operand = %value, "overflow rejected");
    MathError::Overflow { operation }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};

    #[test]
    fn test_add_subtract() {
        let cell = AtomicI32::new(10);
        atomic_add(&cell, 5);
        atomic_subtract(&cell, 20);
        assert_eq!(cell.load(Ordering::SeqCst), -5);
    }

    #[test]
    fn test_add_wraps() {
        let cell = AtomicI32::new(i32::MAX);
        atomic_add(&cell, 1);
        assert_eq!(cell.load(Ordering::SeqCst), i32::MIN);
    }

    #[test]
    fn test_multiply() {
        let cell = AtomicI32::new(3);
        atomic_multiply(&cell, -4);
        assert_eq!(cell.load(Ordering::SeqCst), -12);

        let cell = AtomicI32::new(i32::MAX);
        atomic_multiply(&cell, 2);
        assert_eq!(cell.load(Ordering::SeqCst), -2);
    }

    #[test]
    fn test_divide_truncates() {
        let cell = AtomicI32::new(-7);
        atomic_divide(&cell, 2).unwrap();
        assert_eq!(cell.load(Ordering::SeqCst), -3);
    }

    #[test]
    fn test_divide_by_zero_leaves_cell() {
        let cell = AtomicI32::new(42);
        assert_eq!(atomic_divide(&cell, 0), Err(DomainError::DivisionByZero));
        assert_eq!(cell.load(Ordering::SeqCst), 42);

        assert_eq!(
            atomic_divide_with(&cell, 0, OverflowPolicy::Checked),
            Err(MathError::Domain(DomainError::DivisionByZero))
        );
        assert_eq!(cell.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn test_divide_min_by_minus_one() {
        let cell = AtomicI32::new(i32::MIN);
        atomic_divide(&cell, -1).unwrap();
        assert_eq!(cell.load(Ordering::SeqCst), i32::MIN);

        assert_eq!(
            atomic_divide_with(&cell, -1, OverflowPolicy::Checked),
            Err(MathError::Overflow { operation: "atomic_divide" })
        );
        assert_eq!(cell.load(Ordering::SeqCst), i32::MIN);

        atomic_divide_with(&cell, -1, OverflowPolicy::Saturating).unwrap();
        assert_eq!(cell.load(Ordering::SeqCst), i32::MAX);
    }

    #[test]
    fn test_multiply_policies() {
        let cell = AtomicI32::new(i32::MAX / 2 + 1);

        assert_eq!(
            atomic_multiply_with(&cell, 2, OverflowPolicy::Checked),
            Err(MathError::Overflow { operation: "atomic_multiply" })
        );
        assert_eq!(cell.load(Ordering::SeqCst), i32::MAX / 2 + 1);

        atomic_multiply_with(&cell, 2, OverflowPolicy::Saturating).unwrap();
        assert_eq!(cell.load(Ordering::SeqCst), i32::MAX);

        let cell = AtomicI32::new(i32::MAX / 2 + 1);
        atomic_multiply_with(&cell, 2, OverflowPolicy::Wrapping).unwrap();
        assert_eq!(cell.load(Ordering::SeqCst), i32::MIN);
    }

    #[test]
    fn test_update_reports_previous_and_stored() {
        let cell = AtomicU64::new(6);
        let update = atomic_update(&cell, |v| Some(v * 7)).unwrap();
        assert_eq!(update.previous, 6);
        assert_eq!(update.stored, 42);
        assert_eq!(cell.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn test_update_declined_leaves_cell() {
        let cell = AtomicU64::new(6);
        assert_eq!(atomic_update(&cell, |_| None), None);
        assert_eq!(cell.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_update_retries_on_interference() {
        let cell = AtomicI32::new(1);
        let mut interfered = false;

        // Simulate another thread winning the race once: change the cell
        // between the read and the swap.
        let update = atomic_update(&cell, |current| {
            if !interfered {
                interfered = true;
                cell.store(10, Ordering::SeqCst);
            }
            Some(current * 2)
        })
        .unwrap();

        assert!(update.retries >= 1);
        assert_eq!(update.previous, 10);
        assert_eq!(cell.load(Ordering::SeqCst), 20);
    }
}
