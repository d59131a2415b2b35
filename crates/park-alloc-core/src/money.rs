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

//! Monetary amounts for rates and fees.
//!
//! Fees accrue per fractional hour, so [`Money`] wraps an `f64` rather than
//! an integer minor unit. It deliberately implements only `PartialEq` and
//! `PartialOrd`; callers that need a total order must decide how to treat
//! non-finite values themselves.

use num_traits::Zero;
use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Mul, Sub},
};

/// An amount of money, e.g. a rate or a computed parking fee.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(f64);

impl Money {
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Money(amount)
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// True for negative amounts and for NaN, which is never a valid rate.
    #[inline]
    pub fn is_invalid_rate(self) -> bool {
        !(self.0 >= 0.0) || !self.0.is_finite()
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Money({:.2})", self.0)
    }
}

impl From<f64> for Money {
    #[inline]
    fn from(v: f64) -> Self {
        Money(v)
    }
}

impl Add for Money {
    type Output = Money;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl Mul<f64> for Money {
    type Output = Money;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Money(self.0 * rhs)
    }
}

impl Zero for Money {
    #[inline]
    fn zero() -> Self {
        Money(0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(5.0);
        assert_eq!(m.value(), 5.0);
    }

    #[test]
    fn test_money_display_two_decimals() {
        assert_eq!(format!("{}", Money::new(5.0)), "Money(5.00)");
        assert_eq!(format!("{}", Money::new(12.345)), "Money(12.35)");
    }

    #[test]
    fn test_money_arithmetic() {
        assert_eq!(Money::new(5.0) + Money::new(3.0), Money::new(8.0));
        assert_eq!(Money::new(5.0) - Money::new(3.0), Money::new(2.0));
        assert_eq!(Money::new(3.0) * 2.5, Money::new(7.5));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [5.0, 3.0, 2.0].iter().map(|&v| Money::new(v)).sum();
        assert_eq!(total, Money::new(10.0));
    }

    #[test]
    fn test_money_invalid_rate() {
        assert!(Money::new(-0.01).is_invalid_rate());
        assert!(Money::new(f64::NAN).is_invalid_rate());
        assert!(Money::new(f64::INFINITY).is_invalid_rate());
        assert!(!Money::new(0.0).is_invalid_rate());
        assert!(!Money::new(3.0).is_invalid_rate());
    }
}
