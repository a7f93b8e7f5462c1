//! Dashboard configuration.
//!
//! DESIGN
//! ======
//! The dashboard takes no flags and reads no environment variables. `Config`
//! gathers the fixed constants in one place so `main` and the tests build the
//! same dashboard, with an optional RNG seed for reproducible datasets.

use std::net::{Ipv4Addr, SocketAddr};

use chrono::NaiveDate;

pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_RECORD_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub record_count: usize,
    pub start_date: NaiveDate,
    /// Seed for the dataset RNG. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Config {
    #[cfg(test)]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            record_count: DEFAULT_RECORD_COUNT,
            start_date: default_start_date(),
            seed: None,
        }
    }
}

/// First day of the generated series: 2024-01-01.
#[must_use]
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
