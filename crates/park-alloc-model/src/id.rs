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

/// Identifier of a parking spot. Assigned at creation, immutable, and
/// unique across the live spot set.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpotId(u32);

impl SpotId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        SpotId(id)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Display for SpotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpotId({})", self.0)
    }
}

impl From<u32> for SpotId {
    #[inline]
    fn from(value: u32) -> Self {
        SpotId(value)
    }
}

/// Identifier of a requester. At most one active reservation per driver.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DriverId(u64);

impl DriverId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        DriverId(id)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DriverId({})", self.0)
    }
}

impl From<u64> for DriverId {
    #[inline]
    fn from(value: u64) -> Self {
        DriverId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_id_roundtrip() {
        let id = SpotId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(format!("{}", id), "SpotId(7)");
    }

    #[test]
    fn test_driver_id_roundtrip() {
        let id: DriverId = 99u64.into();
        assert_eq!(id.value(), 99);
        assert_eq!(format!("{}", id), "DriverId(99)");
    }

    #[test]
    fn test_spot_id_ordering() {
        assert!(SpotId::new(1) < SpotId::new(2));
    }
}
