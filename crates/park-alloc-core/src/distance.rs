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

use std::fmt::Display;

/// Scalar distance of a spot from the lot entrance, in meters.
///
/// The proximity ordering of the spot collection is derived from this value
/// alone; the lot has no further geometry.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Distance(f64);

impl Distance {
    #[inline]
    pub const fn new(meters: f64) -> Self {
        Distance(meters)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// True for negative distances and for NaN.
    #[inline]
    pub fn is_invalid(self) -> bool {
        !(self.0 >= 0.0) || !self.0.is_finite()
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl From<f64> for Distance {
    #[inline]
    fn from(v: f64) -> Self {
        Distance(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_creation() {
        let d = Distance::new(12.5);
        assert_eq!(d.value(), 12.5);
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(format!("{}", Distance::new(12.5)), "Distance(12.5)");
    }

    #[test]
    fn test_distance_ordering() {
        assert!(Distance::new(1.0) < Distance::new(2.0));
        assert!(Distance::new(2.0) <= Distance::new(2.0));
    }

    #[test]
    fn test_distance_invalid() {
        assert!(Distance::new(-1.0).is_invalid());
        assert!(Distance::new(f64::NAN).is_invalid());
        assert!(!Distance::new(0.0).is_invalid());
    }
}
