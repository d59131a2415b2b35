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

//! Recoverable error conditions reported by the allocation engine.
//!
//! All of these are local conditions returned to the caller; none are fatal
//! to the process. A failed best-fit scan is deliberately *not* an error
//! type of its own at the policy level; it only becomes
//! [`ReserveError::NoCompatibleSpot`] when a reservation was requested.

use crate::id::{DriverId, SpotId};
use crate::spot::VehicleClass;
use park_alloc_core::{distance::Distance, money::Money};
use std::fmt::Display;

/// Insertion of a spot whose identifier already exists in the index.
///
/// The index is left unchanged; the new value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateIdError {
    id: SpotId,
}

impl DuplicateIdError {
    #[inline]
    pub fn new(id: SpotId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> SpotId {
        self.id
    }
}

impl Display for DuplicateIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Spot {} already exists", self.id)
    }
}

impl std::error::Error for DuplicateIdError {}

/// Reference to a spot identifier that is not in the live spot set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownIdError {
    id: SpotId,
}

impl UnknownIdError {
    #[inline]
    pub fn new(id: SpotId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> SpotId {
        self.id
    }
}

impl Display for UnknownIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Spot {} does not exist", self.id)
    }
}

impl std::error::Error for UnknownIdError {}

/// Why a reservation request was not granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReserveError {
    /// The driver already holds an active reservation.
    AlreadyReserved(DriverId),
    /// No available spot is compatible with the requested vehicle class.
    /// This is a normal empty result, not a failure of the engine.
    NoCompatibleSpot(VehicleClass),
}

impl Display for ReserveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReserveError::AlreadyReserved(driver) => {
                write!(f, "{} already has a reserved spot", driver)
            }
            ReserveError::NoCompatibleSpot(class) => {
                write!(f, "No suitable spots available for {}", class)
            }
        }
    }
}

impl std::error::Error for ReserveError {}

/// Why a release request was not granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseError {
    /// The driver has no active reservation.
    NoActiveReservation(DriverId),
    /// The reservation references a spot that is no longer in the index.
    UnknownSpot(SpotId),
}

impl Display for ReleaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseError::NoActiveReservation(driver) => {
                write!(f, "No reservation found for {}", driver)
            }
            ReleaseError::UnknownSpot(spot) => {
                write!(f, "Reserved spot {} not found in the index", spot)
            }
        }
    }
}

impl std::error::Error for ReleaseError {}

/// Rejected spot construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpotValidationError {
    /// Distance must be finite and non-negative.
    InvalidDistance(SpotId, Distance),
    /// Rates must be finite and non-negative.
    InvalidRate(SpotId, Money),
}

impl Display for SpotValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpotValidationError::InvalidDistance(id, distance) => {
                write!(f, "Spot {} has invalid distance {}", id, distance)
            }
            SpotValidationError::InvalidRate(id, rate) => {
                write!(f, "Spot {} has invalid rate {}", id, rate)
            }
        }
    }
}

impl std::error::Error for SpotValidationError {}
