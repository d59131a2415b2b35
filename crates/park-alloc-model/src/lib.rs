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

//! # Parking Allocation Model (`park-alloc-model`)
//!
//! The domain model for the parking allocation engine. It builds on the
//! typed primitives of `park-alloc-core` to describe lots, requests, and
//! reservations:
//!
//! - **[`SpotId`] / [`DriverId`]**: unique identifiers for spots and
//!   requesters.
//! - **[`Spot`]**: one parking spot, carrying its availability flag, its
//!   [`SlotSize`] tier, its distance from the entrance, and its fee
//!   parameters (base rate plus rate per hour).
//! - **[`VehicleClass`]**: the class of an incoming request, which fixes
//!   the set of slot sizes the vehicle fits into.
//! - **[`Reservation`]**: one active driver-to-spot binding together with
//!   the acquisition timestamp used for fee computation.
//! - **Error types** for every recoverable condition the engine reports.
//! - **[`generator`]**: a seeded lot generator for demos, tests, and
//!   benchmarks.
//!
//! [`SpotId`]: id::SpotId
//! [`DriverId`]: id::DriverId
//! [`Spot`]: spot::Spot
//! [`SlotSize`]: spot::SlotSize
//! [`VehicleClass`]: spot::VehicleClass
//! [`Reservation`]: reservation::Reservation

pub mod err;
pub mod generator;
pub mod id;
pub mod reservation;
pub mod spot;

pub mod prelude {
    pub use crate::err::{
        DuplicateIdError, ReleaseError, ReserveError, SpotValidationError, UnknownIdError,
    };
    pub use crate::generator::{LotGenConfig, LotGenConfigBuilder, LotGenerator};
    pub use crate::id::{DriverId, SpotId};
    pub use crate::reservation::Reservation;
    pub use crate::spot::{SlotSize, Spot, VehicleClass};
}
