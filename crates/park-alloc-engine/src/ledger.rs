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

//! # Reservation Ledger
//!
//! The active map from requester to held spot plus acquisition time,
//! together with the append-only entry/exit activity log. Each spot is
//! either Free or Reserved; a successful reservation moves it Free to
//! Reserved and release moves it back. The ledger is distinct from the
//! revenue log, which is a presentation concern owned by the caller.

use park_alloc_core::{
    money::Money,
    time::{DurationSecs, Timestamp},
};
use park_alloc_model::{
    err::{ReleaseError, ReserveError},
    id::{DriverId, SpotId},
    reservation::Reservation,
    spot::Spot,
};
use std::collections::HashMap;
use std::fmt::Display;

/// Kind of an activity log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    Entry,
    Exit,
}

impl Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogKind::Entry => write!(f, "Entry"),
            LogKind::Exit => write!(f, "Exit"),
        }
    }
}

/// One append-only activity record: a spot was entered or vacated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogRecord {
    spot: SpotId,
    at: Timestamp,
    kind: LogKind,
}

impl LogRecord {
    #[inline]
    pub const fn new(spot: SpotId, at: Timestamp, kind: LogKind) -> Self {
        LogRecord { spot, at, kind }
    }

    #[inline]
    pub const fn spot(&self) -> SpotId {
        self.spot
    }

    #[inline]
    pub const fn at(&self) -> Timestamp {
        self.at
    }

    #[inline]
    pub const fn kind(&self) -> LogKind {
        self.kind
    }
}

/// Outcome of a successful release: which spot was vacated, for how long
/// it was held, and the resulting fee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseReceipt {
    spot: SpotId,
    duration: DurationSecs,
    fee: Money,
}

impl ReleaseReceipt {
    #[inline]
    pub const fn new(spot: SpotId, duration: DurationSecs, fee: Money) -> Self {
        ReleaseReceipt {
            spot,
            duration,
            fee,
        }
    }

    #[inline]
    pub const fn spot(&self) -> SpotId {
        self.spot
    }

    #[inline]
    pub const fn duration(&self) -> DurationSecs {
        self.duration
    }

    /// Billable duration in fractional hours.
    #[inline]
    pub fn hours(&self) -> f64 {
        self.duration.hours()
    }

    #[inline]
    pub const fn fee(&self) -> Money {
        self.fee
    }
}

impl Display for ReleaseReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ReleaseReceipt {{ spot: {}, hours: {:.2}, fee: {} }}",
            self.spot,
            self.hours(),
            self.fee
        )
    }
}

/// Fee for holding `spot` from `entry` until `exit`.
///
/// Negative elapsed time (clock skew) clamps to zero, so the fee is never
/// below the base rate. The hourly component accrues per fractional hour.
pub fn parking_fee(spot: &Spot, entry: Timestamp, exit: Timestamp) -> (DurationSecs, Money) {
    let elapsed = exit.since(entry).max(DurationSecs::zero());
    let fee = spot.base_rate() + spot.rate_per_hour() * elapsed.hours();
    (elapsed, fee)
}

/// Active reservations keyed by driver, plus the activity log.
#[derive(Debug, Clone, Default)]
pub struct ReservationLedger {
    active: HashMap<DriverId, Reservation>,
    log: Vec<LogRecord>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self {
            active: HashMap::new(),
            log: Vec::new(),
        }
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[inline]
    pub fn get(&self, driver: DriverId) -> Option<&Reservation> {
        self.active.get(&driver)
    }

    #[inline]
    pub fn is_active(&self, driver: DriverId) -> bool {
        self.active.contains_key(&driver)
    }

    /// Whether any active reservation references the given spot.
    pub fn is_spot_reserved(&self, spot: SpotId) -> bool {
        self.active.values().any(|r| r.spot() == spot)
    }

    #[inline]
    pub fn iter_active(&self) -> impl Iterator<Item = &Reservation> {
        self.active.values()
    }

    #[inline]
    pub fn log(&self) -> &[LogRecord] {
        &self.log
    }

    /// Opens a reservation and appends an Entry record.
    pub fn open(
        &mut self,
        driver: DriverId,
        spot: SpotId,
        now: Timestamp,
    ) -> Result<Reservation, ReserveError> {
        if self.active.contains_key(&driver) {
            return Err(ReserveError::AlreadyReserved(driver));
        }
        let reservation = Reservation::new(driver, spot, now);
        self.active.insert(driver, reservation);
        self.log.push(LogRecord::new(spot, now, LogKind::Entry));
        Ok(reservation)
    }

    /// Closes the driver's reservation and appends an Exit record.
    pub fn close(&mut self, driver: DriverId, now: Timestamp) -> Result<Reservation, ReleaseError> {
        let reservation = self
            .active
            .remove(&driver)
            .ok_or(ReleaseError::NoActiveReservation(driver))?;
        self.log
            .push(LogRecord::new(reservation.spot(), now, LogKind::Exit));
        Ok(reservation)
    }

    /// Re-inserts a persisted reservation during snapshot replay.
    ///
    /// No activity record is appended; the entry/exit events already
    /// happened in a previous run.
    pub fn restore(&mut self, reservation: Reservation) -> Result<(), ReserveError> {
        if self.active.contains_key(&reservation.driver()) {
            return Err(ReserveError::AlreadyReserved(reservation.driver()));
        }
        self.active.insert(reservation.driver(), reservation);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_alloc_core::distance::Distance;
    use park_alloc_model::spot::SlotSize;

    fn spot_with_rates(base: f64, hourly: f64) -> Spot {
        Spot::new(
            SpotId::new(1),
            SlotSize::Regular,
            Distance::new(10.0),
            Money::new(base),
            Money::new(hourly),
        )
        .expect("valid spot")
    }

    #[test]
    fn test_fee_is_base_rate_for_zero_duration() {
        let spot = spot_with_rates(5.0, 3.0);
        let t = Timestamp::new(1_000);
        let (duration, fee) = parking_fee(&spot, t, t);
        assert_eq!(duration, DurationSecs::zero());
        assert_eq!(fee, Money::new(5.0));
    }

    #[test]
    fn test_fee_accrues_per_fractional_hour() {
        let spot = spot_with_rates(5.0, 3.0);
        let entry = Timestamp::new(0);
        let (duration, fee) = parking_fee(&spot, entry, Timestamp::new(5_400));
        assert_eq!(duration, DurationSecs::new(5_400));
        assert_eq!(fee, Money::new(5.0 + 1.5 * 3.0));
    }

    #[test]
    fn test_fee_clamps_negative_elapsed_time() {
        let spot = spot_with_rates(5.0, 3.0);
        let (duration, fee) =
            parking_fee(&spot, Timestamp::new(10_000), Timestamp::new(400));
        assert_eq!(duration, DurationSecs::zero());
        assert_eq!(fee, Money::new(5.0));
    }

    #[test]
    fn test_fee_is_monotone_in_elapsed_time() {
        let spot = spot_with_rates(5.0, 3.0);
        let entry = Timestamp::new(0);
        let mut last = Money::zero();
        for secs in [-100i64, 0, 1, 1_800, 3_600, 7_200, 86_400] {
            let (_, fee) = parking_fee(&spot, entry, Timestamp::new(secs));
            assert!(fee >= last, "fee must not decrease as time passes");
            last = fee;
        }
    }

    #[test]
    fn test_open_close_lifecycle() {
        let mut ledger = ReservationLedger::new();
        let driver = DriverId::new(7);
        let spot = SpotId::new(2);

        let reservation = ledger
            .open(driver, spot, Timestamp::new(100))
            .expect("no prior reservation");
        assert_eq!(reservation.spot(), spot);
        assert!(ledger.is_active(driver));
        assert!(ledger.is_spot_reserved(spot));
        assert_eq!(ledger.active_count(), 1);

        let closed = ledger
            .close(driver, Timestamp::new(200))
            .expect("active reservation");
        assert_eq!(closed.entry_time(), Timestamp::new(100));
        assert!(!ledger.is_active(driver));
        assert!(!ledger.is_spot_reserved(spot));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_double_open_is_rejected_and_state_unchanged() {
        let mut ledger = ReservationLedger::new();
        let driver = DriverId::new(7);
        ledger
            .open(driver, SpotId::new(2), Timestamp::new(100))
            .expect("no prior reservation");

        let err = ledger
            .open(driver, SpotId::new(3), Timestamp::new(200))
            .expect_err("driver already active");
        assert_eq!(err, ReserveError::AlreadyReserved(driver));

        let kept = ledger.get(driver).expect("first reservation survives");
        assert_eq!(kept.spot(), SpotId::new(2));
        assert_eq!(kept.entry_time(), Timestamp::new(100));
        assert_eq!(ledger.log().len(), 1);
    }

    #[test]
    fn test_close_without_reservation() {
        let mut ledger = ReservationLedger::new();
        let err = ledger
            .close(DriverId::new(9), Timestamp::new(100))
            .expect_err("nothing to close");
        assert_eq!(err, ReleaseError::NoActiveReservation(DriverId::new(9)));
        assert!(ledger.log().is_empty());
    }

    #[test]
    fn test_activity_log_records_entries_and_exits() {
        let mut ledger = ReservationLedger::new();
        let driver = DriverId::new(1);
        ledger
            .open(driver, SpotId::new(5), Timestamp::new(10))
            .expect("open");
        ledger.close(driver, Timestamp::new(20)).expect("close");

        let log = ledger.log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], LogRecord::new(SpotId::new(5), Timestamp::new(10), LogKind::Entry));
        assert_eq!(log[1], LogRecord::new(SpotId::new(5), Timestamp::new(20), LogKind::Exit));
    }

    #[test]
    fn test_restore_does_not_log() {
        let mut ledger = ReservationLedger::new();
        let reservation =
            Reservation::new(DriverId::new(3), SpotId::new(4), Timestamp::new(50));
        ledger.restore(reservation).expect("no prior reservation");

        assert!(ledger.is_active(DriverId::new(3)));
        assert!(ledger.log().is_empty());
        assert_eq!(
            ledger.restore(reservation),
            Err(ReserveError::AlreadyReserved(DriverId::new(3)))
        );
    }
}
