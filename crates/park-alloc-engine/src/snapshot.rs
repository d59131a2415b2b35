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

//! # Snapshot Codec
//!
//! Line-oriented persistence format. Each line is a comma separated
//! record carrying a leading type tag:
//!
//! ```text
//! spot,<id>,<available 0|1>,<size ordinal>,<distance>,<base rate>,<hourly rate>
//! reservation,<driver>,<spot>,<entry unix seconds>
//! ```
//!
//! Untagged legacy lines (6 fields for a spot, 3 for a reservation) are
//! still accepted on read so files written by older deployments keep
//! loading. Malformed lines are skipped and counted, never fatal.

use park_alloc_core::{distance::Distance, money::Money, time::Timestamp};
use park_alloc_model::{
    id::{DriverId, SpotId},
    reservation::Reservation,
    spot::{SlotSize, Spot},
};
use std::{fs, io, path::Path};
use tracing::warn;

const SPOT_TAG: &str = "spot";
const RESERVATION_TAG: &str = "reservation";

const SPOT_FIELDS: usize = 6;
const RESERVATION_FIELDS: usize = 3;

/// Immutable capture of a full lot state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    spots: Vec<Spot>,
    reservations: Vec<Reservation>,
}

impl Snapshot {
    #[inline]
    pub fn new(spots: Vec<Spot>, reservations: Vec<Reservation>) -> Self {
        Snapshot {
            spots,
            reservations,
        }
    }

    #[inline]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    #[inline]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    #[inline]
    pub fn into_parts(self) -> (Vec<Spot>, Vec<Reservation>) {
        (self.spots, self.reservations)
    }

    /// Serializes the snapshot: all spot lines first, then all
    /// reservation lines.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for spot in &self.spots {
            out.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                SPOT_TAG,
                spot.id().value(),
                u8::from(spot.is_available()),
                spot.size().ordinal(),
                spot.distance().value(),
                spot.base_rate().value(),
                spot.rate_per_hour().value(),
            ));
        }
        for reservation in &self.reservations {
            out.push_str(&format!(
                "{},{},{},{}\n",
                RESERVATION_TAG,
                reservation.driver().value(),
                reservation.spot().value(),
                reservation.entry_time().value(),
            ));
        }
        out
    }

    /// Parses a snapshot, skipping lines that do not decode.
    pub fn decode(input: &str) -> DecodeOutcome {
        let mut snapshot = Snapshot::default();
        let mut skipped_lines = 0usize;
        for (number, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            let parsed = match fields.as_slice() {
                [SPOT_TAG, rest @ ..] => decode_spot(rest).map(Record::Spot),
                [RESERVATION_TAG, rest @ ..] => {
                    decode_reservation(rest).map(Record::Reservation)
                }
                // Untagged lines from the legacy format, told apart by
                // field count.
                rest if rest.len() == SPOT_FIELDS => decode_spot(rest).map(Record::Spot),
                rest if rest.len() == RESERVATION_FIELDS => {
                    decode_reservation(rest).map(Record::Reservation)
                }
                _ => None,
            };
            match parsed {
                Some(Record::Spot(spot)) => snapshot.spots.push(spot),
                Some(Record::Reservation(reservation)) => {
                    snapshot.reservations.push(reservation)
                }
                None => {
                    warn!(line = number + 1, "Skipping malformed snapshot line");
                    skipped_lines += 1;
                }
            }
        }
        DecodeOutcome {
            snapshot,
            skipped_lines,
        }
    }

    /// Writes the encoded snapshot to disk, replacing any previous file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, self.encode())
    }

    /// Reads and decodes a snapshot file. A missing file is `Ok(None)`;
    /// a fresh deployment has nothing to restore.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Option<DecodeOutcome>> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(Self::decode(&contents))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Decoded snapshot plus the number of lines that failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutcome {
    pub snapshot: Snapshot,
    pub skipped_lines: usize,
}

enum Record {
    Spot(Spot),
    Reservation(Reservation),
}

fn decode_spot(fields: &[&str]) -> Option<Spot> {
    if fields.len() != SPOT_FIELDS {
        return None;
    }
    let id = SpotId::new(fields[0].parse().ok()?);
    let available = match fields[1] {
        "0" => false,
        "1" => true,
        _ => return None,
    };
    let size = SlotSize::from_ordinal(fields[2].parse().ok()?)?;
    let distance = Distance::new(fields[3].parse().ok()?);
    let base_rate = Money::new(fields[4].parse().ok()?);
    let rate_per_hour = Money::new(fields[5].parse().ok()?);
    let mut spot = Spot::new(id, size, distance, base_rate, rate_per_hour).ok()?;
    spot.set_available(available);
    Some(spot)
}

fn decode_reservation(fields: &[&str]) -> Option<Reservation> {
    if fields.len() != RESERVATION_FIELDS {
        return None;
    }
    let driver = DriverId::new(fields[0].parse().ok()?);
    let spot = SpotId::new(fields[1].parse().ok()?);
    let entry = Timestamp::new(fields[2].parse().ok()?);
    Some(Reservation::new(driver, spot, entry))
}
