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

//! # Spots, Slot Sizes, and Vehicle Classes
//!
//! A [`Spot`] is the unit resource of the lot. Its [`SlotSize`] tier never
//! changes; only the availability flag is mutable. A [`VehicleClass`]
//! classifies an incoming request and fixes, through [`VehicleClass::fits`],
//! the set of slot sizes the vehicle is allowed to occupy:
//!
//! | Vehicle class | Acceptable slot sizes |
//! |---------------|-----------------------|
//! | Motorcycle    | Compact               |
//! | Car           | Regular, Large        |
//! | Truck         | Large                 |

use crate::err::SpotValidationError;
use crate::id::SpotId;
use park_alloc_core::{distance::Distance, money::Money};
use std::fmt::Display;

/// Ordinal size tier of a parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotSize {
    Compact = 1,
    Regular = 2,
    Large = 3,
}

impl SlotSize {
    /// Stable ordinal used by the snapshot format.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(SlotSize::Compact),
            2 => Some(SlotSize::Regular),
            3 => Some(SlotSize::Large),
            _ => None,
        }
    }
}

impl Display for SlotSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotSize::Compact => write!(f, "Compact"),
            SlotSize::Regular => write!(f, "Regular"),
            SlotSize::Large => write!(f, "Large"),
        }
    }
}

/// Class of a parking request, immutable per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VehicleClass {
    Motorcycle = 1,
    Car = 2,
    Truck = 3,
}

impl VehicleClass {
    /// Whether a vehicle of this class fits into a slot of the given size.
    ///
    /// The table is fixed, not configurable.
    #[inline]
    pub const fn fits(self, size: SlotSize) -> bool {
        matches!(
            (self, size),
            (VehicleClass::Motorcycle, SlotSize::Compact)
                | (VehicleClass::Car, SlotSize::Regular)
                | (VehicleClass::Car, SlotSize::Large)
                | (VehicleClass::Truck, SlotSize::Large)
        )
    }

    #[inline]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(VehicleClass::Motorcycle),
            2 => Some(VehicleClass::Car),
            3 => Some(VehicleClass::Truck),
            _ => None,
        }
    }
}

impl Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleClass::Motorcycle => write!(f, "Motorcycle"),
            VehicleClass::Car => write!(f, "Car"),
            VehicleClass::Truck => write!(f, "Truck"),
        }
    }
}

/// One parking spot.
///
/// Identifier, size, distance, and rates are fixed at creation; only the
/// availability flag changes over the spot's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    id: SpotId,
    available: bool,
    size: SlotSize,
    distance: Distance,
    base_rate: Money,
    rate_per_hour: Money,
}

impl Spot {
    /// Creates an available spot, validating distance and rates.
    pub fn new(
        id: SpotId,
        size: SlotSize,
        distance: Distance,
        base_rate: Money,
        rate_per_hour: Money,
    ) -> Result<Self, SpotValidationError> {
        if distance.is_invalid() {
            return Err(SpotValidationError::InvalidDistance(id, distance));
        }
        if base_rate.is_invalid_rate() {
            return Err(SpotValidationError::InvalidRate(id, base_rate));
        }
        if rate_per_hour.is_invalid_rate() {
            return Err(SpotValidationError::InvalidRate(id, rate_per_hour));
        }
        Ok(Spot {
            id,
            available: true,
            size,
            distance,
            base_rate,
            rate_per_hour,
        })
    }

    #[inline]
    pub const fn id(&self) -> SpotId {
        self.id
    }

    #[inline]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    #[inline]
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    #[inline]
    pub const fn size(&self) -> SlotSize {
        self.size
    }

    #[inline]
    pub const fn distance(&self) -> Distance {
        self.distance
    }

    #[inline]
    pub const fn base_rate(&self) -> Money {
        self.base_rate
    }

    #[inline]
    pub const fn rate_per_hour(&self) -> Money {
        self.rate_per_hour
    }
}

impl Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Spot {{ id: {}, available: {}, size: {}, distance: {}, base_rate: {}, rate_per_hour: {} }}",
            self.id, self.available, self.size, self.distance, self.base_rate, self.rate_per_hour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(id: u32, size: SlotSize) -> Spot {
        Spot::new(
            SpotId::new(id),
            size,
            Distance::new(10.0),
            Money::new(5.0),
            Money::new(3.0),
        )
        .expect("valid spot")
    }

    #[test]
    fn test_slot_size_ordinal_roundtrip() {
        for size in [SlotSize::Compact, SlotSize::Regular, SlotSize::Large] {
            assert_eq!(SlotSize::from_ordinal(size.ordinal()), Some(size));
        }
        assert_eq!(SlotSize::from_ordinal(0), None);
        assert_eq!(SlotSize::from_ordinal(4), None);
    }

    #[test]
    fn test_vehicle_class_ordinal_roundtrip() {
        for class in [
            VehicleClass::Motorcycle,
            VehicleClass::Car,
            VehicleClass::Truck,
        ] {
            assert_eq!(VehicleClass::from_ordinal(class as u8), Some(class));
        }
        assert_eq!(VehicleClass::from_ordinal(9), None);
    }

    #[test]
    fn test_compatibility_table() {
        use SlotSize::*;
        use VehicleClass::*;

        assert!(Motorcycle.fits(Compact));
        assert!(!Motorcycle.fits(Regular));
        assert!(!Motorcycle.fits(Large));

        assert!(!Car.fits(Compact));
        assert!(Car.fits(Regular));
        assert!(Car.fits(Large));

        assert!(!Truck.fits(Compact));
        assert!(!Truck.fits(Regular));
        assert!(Truck.fits(Large));
    }

    #[test]
    fn test_spot_starts_available() {
        let s = spot(1, SlotSize::Regular);
        assert!(s.is_available());
        assert_eq!(s.id(), SpotId::new(1));
    }

    #[test]
    fn test_spot_availability_toggle() {
        let mut s = spot(1, SlotSize::Compact);
        s.set_available(false);
        assert!(!s.is_available());
        s.set_available(true);
        assert!(s.is_available());
    }

    #[test]
    fn test_spot_rejects_negative_rate() {
        let result = Spot::new(
            SpotId::new(1),
            SlotSize::Regular,
            Distance::new(10.0),
            Money::new(-5.0),
            Money::new(3.0),
        );
        assert!(matches!(result, Err(SpotValidationError::InvalidRate(..))));
    }

    #[test]
    fn test_spot_rejects_negative_distance() {
        let result = Spot::new(
            SpotId::new(1),
            SlotSize::Regular,
            Distance::new(-1.0),
            Money::new(5.0),
            Money::new(3.0),
        );
        assert!(matches!(
            result,
            Err(SpotValidationError::InvalidDistance(..))
        ));
    }

    #[test]
    fn test_spot_accepts_zero_rates() {
        let result = Spot::new(
            SpotId::new(1),
            SlotSize::Large,
            Distance::new(0.0),
            Money::zero(),
            Money::zero(),
        );
        assert!(result.is_ok());
    }
}
