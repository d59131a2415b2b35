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

//! # Seeded Lot Generator
//!
//! Produces a deterministic parking lot for demos, tests, and benchmarks:
//! consecutive spot ids, a fixed size layout (one regular spot, two compact
//! spots, large spots for the remainder), uniform random distances from the
//! entrance, and flat rates. The same seed always yields the same lot.

use crate::id::SpotId;
use crate::spot::{SlotSize, Spot};
use park_alloc_core::{distance::Distance, money::Money};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::fmt::Display;

/// Rejected lot generator configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LotGenConfigError {
    /// A lot must have at least one spot.
    NoSpots,
    /// The distance range is empty or contains invalid bounds.
    InvalidDistanceRange(f64, f64),
    /// A rate is negative or non-finite.
    InvalidRate(Money),
}

impl Display for LotGenConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LotGenConfigError::NoSpots => write!(f, "Lot must contain at least one spot"),
            LotGenConfigError::InvalidDistanceRange(min, max) => {
                write!(f, "Invalid distance range [{}, {}]", min, max)
            }
            LotGenConfigError::InvalidRate(rate) => write!(f, "Invalid rate {}", rate),
        }
    }
}

impl std::error::Error for LotGenConfigError {}

/// Configuration of a generated lot. Build via [`LotGenConfigBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct LotGenConfig {
    spot_count: usize,
    min_distance: f64,
    max_distance: f64,
    base_rate: Money,
    rate_per_hour: Money,
    seed: u64,
}

impl LotGenConfig {
    #[inline]
    pub fn spot_count(&self) -> usize {
        self.spot_count
    }

    #[inline]
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    #[inline]
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    #[inline]
    pub fn base_rate(&self) -> Money {
        self.base_rate
    }

    #[inline]
    pub fn rate_per_hour(&self) -> Money {
        self.rate_per_hour
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for LotGenConfig {
    fn default() -> Self {
        LotGenConfigBuilder::new()
            .build()
            .expect("default lot config is valid")
    }
}

#[derive(Debug, Clone)]
pub struct LotGenConfigBuilder {
    spot_count: usize,
    min_distance: f64,
    max_distance: f64,
    base_rate: Money,
    rate_per_hour: Money,
    seed: u64,
}

impl LotGenConfigBuilder {
    pub fn new() -> Self {
        Self {
            spot_count: 10,
            min_distance: 1.0,
            max_distance: 100.0,
            base_rate: Money::new(5.0),
            rate_per_hour: Money::new(3.0),
            seed: 42,
        }
    }

    pub fn spot_count(mut self, count: usize) -> Self {
        self.spot_count = count;
        self
    }

    pub fn distance_range(mut self, min: f64, max: f64) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    pub fn base_rate(mut self, rate: Money) -> Self {
        self.base_rate = rate;
        self
    }

    pub fn rate_per_hour(mut self, rate: Money) -> Self {
        self.rate_per_hour = rate;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<LotGenConfig, LotGenConfigError> {
        if self.spot_count == 0 {
            return Err(LotGenConfigError::NoSpots);
        }
        if !self.min_distance.is_finite()
            || !self.max_distance.is_finite()
            || self.min_distance < 0.0
            || self.min_distance > self.max_distance
        {
            return Err(LotGenConfigError::InvalidDistanceRange(
                self.min_distance,
                self.max_distance,
            ));
        }
        if self.base_rate.is_invalid_rate() {
            return Err(LotGenConfigError::InvalidRate(self.base_rate));
        }
        if self.rate_per_hour.is_invalid_rate() {
            return Err(LotGenConfigError::InvalidRate(self.rate_per_hour));
        }
        Ok(LotGenConfig {
            spot_count: self.spot_count,
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            base_rate: self.base_rate,
            rate_per_hour: self.rate_per_hour,
            seed: self.seed,
        })
    }
}

impl Default for LotGenConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic spot generator driven by a [`LotGenConfig`].
#[derive(Debug)]
pub struct LotGenerator {
    config: LotGenConfig,
    rng: SmallRng,
}

impl From<LotGenConfig> for LotGenerator {
    fn from(config: LotGenConfig) -> Self {
        let rng = SmallRng::seed_from_u64(config.seed);
        Self { config, rng }
    }
}

impl LotGenerator {
    #[inline]
    pub fn config(&self) -> &LotGenConfig {
        &self.config
    }

    /// Generates the full spot set for the configured lot.
    pub fn generate(&mut self) -> Vec<Spot> {
        let mut spots = Vec::with_capacity(self.config.spot_count);
        for i in 0..self.config.spot_count {
            let size = Self::size_for_index(i);
            let distance = Distance::new(
                self.rng
                    .random_range(self.config.min_distance..=self.config.max_distance),
            );
            let spot = Spot::new(
                SpotId::new(i as u32),
                size,
                distance,
                self.config.base_rate,
                self.config.rate_per_hour,
            )
            .expect("generated spot parameters are validated by the config");
            spots.push(spot);
        }
        spots
    }

    // One regular spot, two compact, the rest large.
    #[inline]
    fn size_for_index(index: usize) -> SlotSize {
        match index {
            0 => SlotSize::Regular,
            1 | 2 => SlotSize::Compact,
            _ => SlotSize::Large,
        }
    }
}
