//! Synthetic sales dataset.
//!
//! DESIGN
//! ======
//! The dataset is generated once at startup and never mutated: one record per
//! day for a run of consecutive days, each with a uniformly drawn sales figure
//! and region. Everything downstream (defaults, filtering, charting) reads it
//! through shared references.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::filter::FilterState;

/// Lowest generated sales figure (inclusive).
pub const SALES_MIN: u32 = 100;
/// Highest generated sales figure (exclusive).
pub const SALES_MAX: u32 = 500;

// =============================================================================
// REGION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RECORD / DATASET
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub sales: u32,
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Generate `count` records on consecutive days starting at `start`.
    pub fn generate<R: Rng>(rng: &mut R, start: NaiveDate, count: usize) -> Self {
        let records = start
            .iter_days()
            .take(count)
            .map(|date| Record {
                date,
                sales: rng.random_range(SALES_MIN..SALES_MAX),
                region: Region::ALL[rng.random_range(0..Region::ALL.len())],
            })
            .collect();
        Self { records }
    }

    #[must_use]
    pub fn generate_seeded(seed: u64, start: NaiveDate, count: usize) -> Self {
        Self::generate(&mut StdRng::seed_from_u64(seed), start, count)
    }

    /// Build the dataset described by `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        match config.seed {
            Some(seed) => Self::generate_seeded(seed, config.start_date, config.record_count),
            None => Self::generate(&mut rand::rng(), config.start_date, config.record_count),
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records().iter().map(|r| r.date).min()
    }

    #[must_use]
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records().iter().map(|r| r.date).max()
    }

    /// Distinct regions in order of first appearance.
    #[must_use]
    pub fn regions(&self) -> Vec<Region> {
        let mut seen = Vec::with_capacity(Region::ALL.len());
        for record in self.records() {
            if !seen.contains(&record.region) {
                seen.push(record.region);
            }
        }
        seen
    }

    /// Records matching `filter`, in dataset order.
    #[must_use]
    pub fn filter(&self, filter: &FilterState) -> Vec<&Record> {
        self.records().iter().filter(|r| filter.matches(r)).collect()
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
