// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Wall-Clock Time Types
//!
//! - [`Timestamp`]: a point in wall-clock time, in whole seconds since the
//!   Unix epoch. Supplied by the caller at reserve/release time.
//! - [`DurationSecs`]: a signed difference between two `Timestamp`s.
//!
//! A billing period is derived from two timestamps, so `DurationSecs` can be
//! negative when clocks skew backwards; fee computation clamps it at zero.

use num_traits::{CheckedAdd, CheckedSub, SaturatingAdd, SaturatingSub, Zero};
use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

pub const SECONDS_PER_HOUR: i64 = 3_600;

/// A point in wall-clock time, in whole seconds since the Unix epoch.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    #[inline]
    pub const fn new(seconds: i64) -> Self {
        Timestamp(seconds)
    }

    #[inline]
    pub fn zero() -> Self {
        Timestamp(0)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// The signed elapsed time from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> DurationSecs {
        DurationSecs::new(
            self.0
                .checked_sub(earlier.0)
                .expect("underflow in Timestamp::since"),
        )
    }

    #[inline]
    pub fn checked_add(self, delta: DurationSecs) -> Option<Self> {
        self.0.checked_add(delta.0).map(Timestamp)
    }

    #[inline]
    pub fn checked_sub(self, delta: DurationSecs) -> Option<Self> {
        self.0.checked_sub(delta.0).map(Timestamp)
    }

    #[inline]
    pub fn saturating_add(self, delta: DurationSecs) -> Self {
        Timestamp(self.0.saturating_add(delta.0))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}

impl From<i64> for Timestamp {
    #[inline]
    fn from(v: i64) -> Self {
        Timestamp(v)
    }
}

/// A signed span of time, in whole seconds.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DurationSecs(i64);

impl DurationSecs {
    #[inline]
    pub const fn new(seconds: i64) -> Self {
        DurationSecs(seconds)
    }

    #[inline]
    pub fn zero() -> Self {
        DurationSecs(0)
    }

    #[inline]
    pub const fn from_hours(hours: i64) -> Self {
        DurationSecs(hours * SECONDS_PER_HOUR)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Fractional hours represented by this span.
    #[inline]
    pub fn hours(self) -> f64 {
        self.0 as f64 / SECONDS_PER_HOUR as f64
    }

    #[inline]
    pub fn abs(self) -> Self {
        DurationSecs(self.0.abs())
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn checked_add(self, rhs: DurationSecs) -> Option<Self> {
        self.0.checked_add(rhs.0).map(DurationSecs)
    }

    #[inline]
    pub fn checked_sub(self, rhs: DurationSecs) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(DurationSecs)
    }

    #[inline]
    pub fn saturating_add(self, rhs: DurationSecs) -> Self {
        DurationSecs(self.0.saturating_add(rhs.0))
    }

    #[inline]
    pub fn saturating_sub(self, rhs: DurationSecs) -> Self {
        DurationSecs(self.0.saturating_sub(rhs.0))
    }
}

impl Display for DurationSecs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DurationSecs({})", self.0)
    }
}

impl From<i64> for DurationSecs {
    #[inline]
    fn from(v: i64) -> Self {
        DurationSecs(v)
    }
}

impl Add<DurationSecs> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn add(self, rhs: DurationSecs) -> Self::Output {
        Timestamp(
            self.0
                .checked_add(rhs.0)
                .expect("overflow in Timestamp + DurationSecs"),
        )
    }
}

impl AddAssign<DurationSecs> for Timestamp {
    fn add_assign(&mut self, rhs: DurationSecs) {
        self.0 = self
            .0
            .checked_add(rhs.0)
            .expect("overflow in Timestamp += DurationSecs");
    }
}

impl Sub<DurationSecs> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn sub(self, rhs: DurationSecs) -> Self::Output {
        Timestamp(
            self.0
                .checked_sub(rhs.0)
                .expect("underflow in Timestamp - DurationSecs"),
        )
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = DurationSecs;

    #[inline]
    fn sub(self, rhs: Timestamp) -> Self::Output {
        self.since(rhs)
    }
}

impl Add for DurationSecs {
    type Output = DurationSecs;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        DurationSecs(
            self.0
                .checked_add(rhs.0)
                .expect("overflow in DurationSecs + DurationSecs"),
        )
    }
}

impl AddAssign for DurationSecs {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_add(rhs.0)
            .expect("overflow in DurationSecs += DurationSecs");
    }
}

impl Sub for DurationSecs {
    type Output = DurationSecs;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        DurationSecs(
            self.0
                .checked_sub(rhs.0)
                .expect("underflow in DurationSecs - DurationSecs"),
        )
    }
}

impl SubAssign for DurationSecs {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_sub(rhs.0)
            .expect("underflow in DurationSecs -= DurationSecs");
    }
}

impl Neg for DurationSecs {
    type Output = DurationSecs;

    fn neg(self) -> Self::Output {
        DurationSecs(
            0i64.checked_sub(self.0)
                .expect("underflow in -DurationSecs"),
        )
    }
}

impl CheckedAdd for DurationSecs {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(DurationSecs)
    }
}

impl CheckedSub for DurationSecs {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(DurationSecs)
    }
}

impl SaturatingAdd for DurationSecs {
    fn saturating_add(&self, rhs: &Self) -> Self {
        DurationSecs(self.0.saturating_add(rhs.0))
    }
}

impl SaturatingSub for DurationSecs {
    fn saturating_sub(&self, rhs: &Self) -> Self {
        DurationSecs(self.0.saturating_sub(rhs.0))
    }
}

impl Zero for DurationSecs {
    #[inline]
    fn zero() -> Self {
        DurationSecs(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Sum for DurationSecs {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_creation() {
        let ts = Timestamp::new(1_700_000_000);
        assert_eq!(ts.value(), 1_700_000_000);
    }

    #[test]
    fn test_timestamp_display() {
        let ts = Timestamp::new(42);
        assert_eq!(format!("{}", ts), "Timestamp(42)");
    }

    #[test]
    fn test_timestamp_from() {
        let ts: Timestamp = 42i64.into();
        assert_eq!(ts.value(), 42);
    }

    #[test]
    fn test_timestamp_since_positive() {
        let entry = Timestamp::new(100);
        let exit = Timestamp::new(7_300);
        assert_eq!(exit.since(entry), DurationSecs::new(7_200));
    }

    #[test]
    fn test_timestamp_since_negative_on_skew() {
        let entry = Timestamp::new(7_300);
        let exit = Timestamp::new(100);
        assert!(exit.since(entry).is_negative());
    }

    #[test]
    fn test_timestamp_sub_timestamp() {
        assert_eq!(
            Timestamp::new(20) - Timestamp::new(5),
            DurationSecs::new(15)
        );
    }

    #[test]
    fn test_timestamp_add_duration() {
        let ts = Timestamp::new(10) + DurationSecs::new(5);
        assert_eq!(ts, Timestamp::new(15));
    }

    #[test]
    fn test_timestamp_checked_add_overflow() {
        let ts = Timestamp::new(i64::MAX);
        assert_eq!(ts.checked_add(DurationSecs::new(1)), None);
    }

    #[test]
    fn test_duration_hours_fractional() {
        assert_eq!(DurationSecs::new(1_800).hours(), 0.5);
        assert_eq!(DurationSecs::from_hours(2).hours(), 2.0);
    }

    #[test]
    fn test_duration_zero_and_neg() {
        assert!(DurationSecs::zero().is_zero());
        assert_eq!(-DurationSecs::new(42), DurationSecs::new(-42));
    }

    #[test]
    fn test_duration_clamp_at_zero_via_max() {
        let skewed = DurationSecs::new(-30);
        assert_eq!(skewed.max(DurationSecs::zero()), DurationSecs::zero());
    }

    #[test]
    fn test_duration_sum() {
        let total: DurationSecs = [1i64, 2, 3]
            .iter()
            .map(|&s| DurationSecs::new(s))
            .sum();
        assert_eq!(total, DurationSecs::new(6));
    }

    #[test]
    #[should_panic(expected = "overflow in Timestamp + DurationSecs")]
    fn test_timestamp_add_panic_on_overflow() {
        let _ = Timestamp::new(i64::MAX) + DurationSecs::new(1);
    }
}
