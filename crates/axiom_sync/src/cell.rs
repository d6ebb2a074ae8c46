//! # Counter Cells
//!
//! [`AtomicCounter`] is the seam between the retry protocols in
//! [`ops`](crate::ops) and the std atomic integer types. The caller owns the
//! cell; the toolkit only borrows it for one read-modify-write.
//!
//! ## Memory Ordering
//!
//! - loads: `Acquire`
//! - fetch-add/sub and successful swaps: `AcqRel`
//! - failed swaps: `Acquire`
//!
//! Every update therefore publishes everything the updating thread wrote
//! before it, and every reader of the new value sees those writes.

use std::fmt::{Debug, Display};
use std::sync::atomic::{
    AtomicI32, AtomicI64, AtomicIsize, AtomicU32, AtomicU64, AtomicUsize, Ordering,
};

/// Fixed-width integer stored in an [`AtomicCounter`].
///
/// All arithmetic is explicit about overflow.
pub trait CounterValue: Copy + Eq + Debug + Display + Send + Sync + 'static {
    /// Zero.
    const ZERO: Self;

    /// Product with two's complement wraparound.
    #[must_use]
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Product, `None` on overflow.
    #[must_use]
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    /// Product clamped to the type's bounds.
    #[must_use]
    fn saturating_mul(self, rhs: Self) -> Self;

    /// Truncating quotient, wrapping `MIN / -1` to `MIN`. `rhs` must be non-zero.
    #[must_use]
    fn wrapping_div(self, rhs: Self) -> Self;
    /// Truncating quotient, `None` on overflow or zero divisor.
    #[must_use]
    fn checked_div(self, rhs: Self) -> Option<Self>;
    /// Truncating quotient clamped to the type's bounds. `rhs` must be non-zero.
    #[must_use]
    fn saturating_div(self, rhs: Self) -> Self;
}

/// A shared integer cell that can be updated from many threads at once.
pub trait AtomicCounter: Send + Sync {
    /// The integer type held by the cell.
    type Value: CounterValue;

    /// Reads the current value.
    fn load_value(&self) -> Self::Value;

    /// Adds `value` (wrapping) and returns the previous value. Wait-free.
    fn fetch_add_value(&self, value: Self::Value) -> Self::Value;

    /// Subtracts `value` (wrapping) and returns the previous value. Wait-free.
    fn fetch_sub_value(&self, value: Self::Value) -> Self::Value;

    /// Stores `new` only if the cell still holds `current`.
    ///
    /// May fail spuriously. On failure returns the value actually observed.
    ///
    /// # Errors
    ///
    /// `Err(observed)` if the cell did not hold `current`, or on spurious
    /// failure.
    fn compare_exchange_weak_value(
        &self,
        current: Self::Value,
        new: Self::Value,
    ) -> Result<Self::Value, Self::Value>;
}

macro_rules! impl_counter {
    ($($atomic:ty => $int:ty),* $(,)?) => {$(
        impl CounterValue for $int {
            const ZERO: Self = 0;

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$int>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$int>::checked_mul(self, rhs)
            }

            #[inline]
            fn saturating_mul(self, rhs: Self) -> Self {
                <$int>::saturating_mul(self, rhs)
            }

            #[inline]
            fn wrapping_div(self, rhs: Self) -> Self {
                <$int>::wrapping_div(self, rhs)
            }

            #[inline]
            fn checked_div(self, rhs: Self) -> Option<Self> {
                <$int>::checked_div(self, rhs)
            }

            #[inline]
            fn saturating_div(self, rhs: Self) -> Self {
                <$int>::saturating_div(self, rhs)
            }
        }

        impl AtomicCounter for $atomic {
            type Value = $int;

            #[inline]
            fn load_value(&self) -> $int {
                self.load(Ordering::Acquire)
            }

            #[inline]
            fn fetch_add_value(&self, value: $int) -> $int {
                self.fetch_add(value, Ordering::AcqRel)
            }

            #[inline]
            fn fetch_sub_value(&self, value: $int) -> $int {
                self.fetch_sub(value, Ordering::AcqRel)
            }

            #[inline]
            fn compare_exchange_weak_value(&self, current: $int, new: $int) -> Result<$int, $int> {
                self.compare_exchange_weak(current, new, Ordering::AcqRel, Ordering::Acquire)
            }
        }
    )*};
}

impl_counter! {
    AtomicI32 => i32,
    AtomicI64 => i64,
    AtomicIsize => isize,
    AtomicU32 => u32,
    AtomicU64 => u64,
    AtomicUsize => usize,
}
