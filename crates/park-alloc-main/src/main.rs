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

mod revenue;
mod roster;

use park_alloc_core::time::Timestamp;
use park_alloc_engine::{engine::ParkingEngine, snapshot::Snapshot};
use park_alloc_model::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use revenue::RevenueLog;
use roster::Roster;
use serde::Serialize;
use std::{collections::HashMap, fs::File, io::BufWriter};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const SNAPSHOT_PATH: &str = "parking_data.txt";
const REPORT_PATH: &str = "simulation_report.json";

const SIM_SEED: u64 = 7;
const SIM_STEPS: usize = 200;
const SIM_DRIVERS: u64 = 30;

#[allow(dead_code)]
fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct SessionRecord {
    driver: u64,
    class: String,
    spot: u32,
    entered_at: i64,
    exited_at: i64,
    hours: f64,
    fee: f64,
}

#[derive(Debug, Clone, Serialize)]
struct SimulationReport {
    description: String,
    seed: u64,
    spot_count: usize,
    sessions: Vec<SessionRecord>,
    rejections: usize,
    open_reservations: usize,
    total_revenue: f64,
}

/// Restores the lot from the snapshot file, or generates a fresh one if
/// no snapshot exists yet.
fn load_or_generate() -> ParkingEngine {
    match Snapshot::load(SNAPSHOT_PATH) {
        Ok(Some(outcome)) => {
            if outcome.skipped_lines > 0 {
                warn!(
                    skipped = outcome.skipped_lines,
                    "Snapshot file had malformed lines"
                );
            }
            info!(path = SNAPSHOT_PATH, "Restoring lot from snapshot");
            ParkingEngine::from_snapshot(outcome.snapshot)
        }
        Ok(None) => {
            info!(path = SNAPSHOT_PATH, "No snapshot found; generating lot");
            generate_lot()
        }
        Err(e) => {
            warn!(error = %e, "Snapshot unreadable; generating lot");
            generate_lot()
        }
    }
}

fn generate_lot() -> ParkingEngine {
    let cfg = LotGenConfigBuilder::new()
        .spot_count(10)
        .seed(42)
        .build()
        .expect("valid lot config");
    let mut generator = LotGenerator::from(cfg);
    ParkingEngine::from_spots(generator.generate()).expect("generator emits distinct ids")
}

fn random_class(rng: &mut impl Rng) -> VehicleClass {
    match rng.random_range(1..=3u8) {
        1 => VehicleClass::Motorcycle,
        2 => VehicleClass::Car,
        _ => VehicleClass::Truck,
    }
}

fn main() {
    enable_tracing();

    let roster = Roster::new();
    if !roster.authorize("alice", 18041) {
        eprintln!("operator not authorized, aborting");
        std::process::exit(1);
    }

    let mut engine = load_or_generate();
    let spot_count = engine.spot_count();

    let mut rng = ChaCha8Rng::seed_from_u64(SIM_SEED);
    let mut clock = Timestamp::new(0);
    let mut revenue = RevenueLog::new();
    let mut sessions: Vec<SessionRecord> = Vec::new();
    let mut classes: HashMap<DriverId, VehicleClass> = HashMap::new();
    let mut rejections = 0usize;

    for _ in 0..SIM_STEPS {
        clock = clock + park_alloc_core::time::DurationSecs::new(rng.random_range(60..=900));
        let driver = DriverId::new(rng.random_range(1..=SIM_DRIVERS));

        if engine.listing().reservation(driver).is_some() {
            let entry = engine
                .listing()
                .reservation(driver)
                .map(|r| r.entry_time())
                .expect("reservation checked above");
            match engine.allocator().release(driver, clock) {
                Ok(receipt) => {
                    revenue.push(receipt.fee());
                    // Reservations restored from a previous run have no
                    // class recorded in this process.
                    let class = classes
                        .remove(&driver)
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "unknown".into());
                    sessions.push(SessionRecord {
                        driver: driver.value(),
                        class,
                        spot: receipt.spot().value(),
                        entered_at: entry.value(),
                        exited_at: clock.value(),
                        hours: receipt.hours(),
                        fee: receipt.fee().value(),
                    });
                }
                Err(e) => warn!(error = %e, "Release failed"),
            }
        } else {
            let class = random_class(&mut rng);
            match engine.allocator().reserve(driver, class, clock) {
                Ok(_) => {
                    classes.insert(driver, class);
                }
                Err(ReserveError::NoCompatibleSpot(_)) => rejections += 1,
                Err(e) => warn!(error = %e, "Reserve failed"),
            }
        }
    }

    let report = SimulationReport {
        description: format!(
            "Parking lot simulation: {SIM_STEPS} steps, {SIM_DRIVERS} drivers over {spot_count} spots."
        ),
        seed: SIM_SEED,
        spot_count,
        sessions,
        rejections,
        open_reservations: engine.active_reservations(),
        total_revenue: revenue.total().value(),
    };

    let file = File::create(REPORT_PATH).expect("create report file");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    engine
        .snapshot()
        .save(SNAPSHOT_PATH)
        .expect("write snapshot file");

    println!();
    println!("=================================================================");
    println!("======================= Simulation Done =========================");
    println!("=================================================================");
    println!();
    println!("Spots:             {spot_count}");
    println!("Sessions billed:   {}", report.sessions.len());
    println!("Rejections:        {}", report.rejections);
    println!("Still parked:      {}", report.open_reservations);
    println!("Total revenue:     {}", revenue.total());
    if let Some(latest) = revenue.iter_lifo().next() {
        println!("Latest fee:        {latest}");
    }
    println!();
    println!("Wrote: {REPORT_PATH}");
    println!("Wrote: {SNAPSHOT_PATH}");
}
