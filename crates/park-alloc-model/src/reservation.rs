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

use crate::id::{DriverId, SpotId};
use park_alloc_core::time::Timestamp;
use std::fmt::Display;

/// An active driver-to-spot binding.
///
/// Created when an allocation succeeds, destroyed on release, never
/// otherwise mutated. The entry timestamp is the acquisition time used
/// for fee computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reservation {
    driver: DriverId,
    spot: SpotId,
    entry_time: Timestamp,
}

impl Reservation {
    #[inline]
    pub const fn new(driver: DriverId, spot: SpotId, entry_time: Timestamp) -> Self {
        Reservation {
            driver,
            spot,
            entry_time,
        }
    }

    #[inline]
    pub const fn driver(&self) -> DriverId {
        self.driver
    }

    #[inline]
    pub const fn spot(&self) -> SpotId {
        self.spot
    }

    #[inline]
    pub const fn entry_time(&self) -> Timestamp {
        self.entry_time
    }
}

impl Display for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Reservation {{ driver: {}, spot: {}, entry_time: {} }}",
            self.driver, self.spot, self.entry_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_accessors() {
        let r = Reservation::new(DriverId::new(7), SpotId::new(2), Timestamp::new(1_000));
        assert_eq!(r.driver(), DriverId::new(7));
        assert_eq!(r.spot(), SpotId::new(2));
        assert_eq!(r.entry_time(), Timestamp::new(1_000));
    }
}
