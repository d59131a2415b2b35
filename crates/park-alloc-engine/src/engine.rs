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

//! # Parking Engine
//!
//! The facade that ties the spot index, the proximity ordering, the
//! allocation policy and the reservation ledger together. Callers that
//! only read go through [`Listing`]; callers that mutate go through
//! [`Allocator`]. The engine is single threaded; callers that need
//! concurrency wrap it themselves.

use crate::{
    index::SpotIndex,
    ledger::{parking_fee, ReleaseReceipt, ReservationLedger},
    policy,
    proximity::sort_by_proximity,
    snapshot::Snapshot,
};
use park_alloc_core::time::Timestamp;
use park_alloc_model::{
    err::{DuplicateIdError, ReleaseError, ReserveError, UnknownIdError},
    id::{DriverId, SpotId},
    reservation::Reservation,
    spot::{Spot, VehicleClass},
};
use tracing::{info, instrument, warn};

/// Central allocation state: one id-keyed index and one proximity-ordered
/// mirror of the same spots.
///
/// Invariant: `index` and `by_proximity` hold the same set of spots with
/// the same availability flags at all times. The mirror is re-sorted only
/// when the set itself changes; pure availability flips keep the order.
#[derive(Debug, Clone, Default)]
pub struct ParkingEngine {
    index: SpotIndex,
    by_proximity: Vec<Spot>,
    ledger: ReservationLedger,
}

impl ParkingEngine {
    pub fn new() -> Self {
        Self {
            index: SpotIndex::new(),
            by_proximity: Vec::new(),
            ledger: ReservationLedger::new(),
        }
    }

    /// Builds an engine from a batch of spots.
    ///
    /// The first duplicate id aborts the build; partially inserted state
    /// is discarded with the engine.
    pub fn from_spots<I>(spots: I) -> Result<Self, DuplicateIdError>
    where
        I: IntoIterator<Item = Spot>,
    {
        let mut engine = Self::new();
        for spot in spots {
            engine.add_spot(spot)?;
        }
        Ok(engine)
    }

    #[inline]
    pub fn spot_count(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn active_reservations(&self) -> usize {
        self.ledger.active_count()
    }

    #[inline]
    pub fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    /// Read-only view over the lot.
    #[inline]
    pub fn listing(&self) -> Listing<'_> {
        Listing { engine: self }
    }

    /// Mutating view over reservations and availability.
    #[inline]
    pub fn allocator(&mut self) -> Allocator<'_> {
        Allocator { engine: self }
    }

    #[inline]
    pub fn spot(&self, id: SpotId) -> Option<&Spot> {
        self.index.get(id)
    }

    /// All spots ordered by distance, nearest first.
    #[inline]
    pub fn spots_by_proximity(&self) -> &[Spot] {
        &self.by_proximity
    }

    /// Available spots a vehicle of the given class may occupy, nearest
    /// first.
    pub fn list_available(&self, class: VehicleClass) -> Vec<&Spot> {
        policy::compatible_available(&self.by_proximity, class).collect()
    }

    /// Registers a new spot. Rejects ids already present.
    #[instrument(level = "info", skip_all, fields(spot = %spot.id()))]
    pub fn add_spot(&mut self, spot: Spot) -> Result<(), DuplicateIdError> {
        self.index.insert(spot)?;
        self.by_proximity.push(spot);
        sort_by_proximity(&mut self.by_proximity);
        Ok(())
    }

    /// Flips the availability flag of a known spot.
    ///
    /// Distances do not change, so the proximity order is left alone.
    pub fn set_availability(
        &mut self,
        id: SpotId,
        available: bool,
    ) -> Result<(), UnknownIdError> {
        let spot = self.index.get_mut(id).ok_or_else(|| UnknownIdError::new(id))?;
        spot.set_available(available);
        let mirrored = self
            .by_proximity
            .iter_mut()
            .find(|s| s.id() == id)
            .expect("index and proximity mirror hold the same spots");
        mirrored.set_available(available);
        Ok(())
    }

    /// Reserves the nearest available compatible spot for the driver.
    #[instrument(level = "info", skip_all, fields(driver = %driver, class = %class), err(Display))]
    pub fn reserve(
        &mut self,
        driver: DriverId,
        class: VehicleClass,
        now: Timestamp,
    ) -> Result<SpotId, ReserveError> {
        if self.ledger.is_active(driver) {
            return Err(ReserveError::AlreadyReserved(driver));
        }
        let spot = policy::find_best_fit(&self.by_proximity, class)
            .ok_or(ReserveError::NoCompatibleSpot(class))?;
        self.ledger.open(driver, spot, now)?;
        self.set_availability(spot, false)
            .expect("best fit came out of the proximity mirror");
        info!(spot = %spot, "Reservation opened");
        Ok(spot)
    }

    /// Releases the driver's reservation and returns the billed receipt.
    #[instrument(level = "info", skip_all, fields(driver = %driver), err(Display))]
    pub fn release(
        &mut self,
        driver: DriverId,
        now: Timestamp,
    ) -> Result<ReleaseReceipt, ReleaseError> {
        let reservation = *self
            .ledger
            .get(driver)
            .ok_or(ReleaseError::NoActiveReservation(driver))?;
        let spot = *self
            .index
            .get(reservation.spot())
            .ok_or(ReleaseError::UnknownSpot(reservation.spot()))?;
        let (duration, fee) = parking_fee(&spot, reservation.entry_time(), now);
        self.ledger.close(driver, now)?;
        self.set_availability(spot.id(), true)
            .expect("reserved spot is present in the index");
        info!(spot = %spot.id(), fee = %fee, "Reservation closed");
        Ok(ReleaseReceipt::new(spot.id(), duration, fee))
    }

    /// Full state capture: spots in ascending id order, active
    /// reservations in ascending driver order.
    pub fn snapshot(&self) -> Snapshot {
        let spots: Vec<Spot> = self.index.iter().copied().collect();
        let mut reservations: Vec<Reservation> =
            self.ledger.iter_active().copied().collect();
        reservations.sort_by_key(|r| r.driver());
        Snapshot::new(spots, reservations)
    }

    /// Rebuilds an engine from a snapshot.
    ///
    /// Duplicate spot ids and reservations that point at unknown spots or
    /// repeat a driver are dropped with a warning; a persisted file never
    /// poisons the runtime state.
    #[instrument(level = "info", skip_all)]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let (spots, reservations) = snapshot.into_parts();
        let mut engine = Self::new();
        for spot in spots {
            if let Err(e) = engine.add_spot(spot) {
                warn!(error = %e, "Skipping duplicate spot from snapshot");
            }
        }
        for reservation in reservations {
            if engine.index.get(reservation.spot()).is_none() {
                warn!(
                    driver = %reservation.driver(),
                    spot = %reservation.spot(),
                    "Skipping reservation for unknown spot"
                );
                continue;
            }
            match engine.ledger.restore(reservation) {
                Ok(()) => {
                    engine
                        .set_availability(reservation.spot(), false)
                        .expect("spot presence checked above");
                }
                Err(e) => warn!(error = %e, "Skipping duplicate reservation"),
            }
        }
        info!(
            spots = engine.spot_count(),
            reservations = engine.active_reservations(),
            "Snapshot restored"
        );
        engine
    }

    /// Replaces the whole engine state with the snapshot in one step.
    /// Callers never observe a half-loaded lot.
    pub fn replace_with_snapshot(&mut self, snapshot: Snapshot) {
        *self = Self::from_snapshot(snapshot);
    }
}

/// Read capability: queries only, no way to touch reservations.
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    engine: &'a ParkingEngine,
}

impl<'a> Listing<'a> {
    #[inline]
    pub fn spot(&self, id: SpotId) -> Option<&'a Spot> {
        self.engine.spot(id)
    }

    #[inline]
    pub fn spots_by_proximity(&self) -> &'a [Spot] {
        self.engine.spots_by_proximity()
    }

    #[inline]
    pub fn available(&self, class: VehicleClass) -> Vec<&'a Spot> {
        self.engine.list_available(class)
    }

    #[inline]
    pub fn reservation(&self, driver: DriverId) -> Option<&'a Reservation> {
        self.engine.ledger.get(driver)
    }
}

/// Mutation capability: reservation lifecycle and availability flips.
#[derive(Debug)]
pub struct Allocator<'a> {
    engine: &'a mut ParkingEngine,
}

impl Allocator<'_> {
    #[inline]
    pub fn reserve(
        &mut self,
        driver: DriverId,
        class: VehicleClass,
        now: Timestamp,
    ) -> Result<SpotId, ReserveError> {
        self.engine.reserve(driver, class, now)
    }

    #[inline]
    pub fn release(
        &mut self,
        driver: DriverId,
        now: Timestamp,
    ) -> Result<ReleaseReceipt, ReleaseError> {
        self.engine.release(driver, now)
    }

    #[inline]
    pub fn set_availability(
        &mut self,
        id: SpotId,
        available: bool,
    ) -> Result<(), UnknownIdError> {
        self.engine.set_availability(id, available)
    }
}
