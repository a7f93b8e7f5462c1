//! Filter state for the dashboard controls.
//!
//! DESIGN
//! ======
//! `FilterState` is owned by the page: the server never stores it, it only
//! receives the current values with each update request. Matching is
//! permissive. A start after the end simply matches nothing, region labels
//! are not checked against the dataset, and an unset date bound matches no
//! record at all.
//!
//! Bounds are timestamps. A record's date counts as midnight of that day, so
//! a start bound later than midnight excludes its own day while a date-only
//! bound includes it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dataset::{Dataset, Record};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    #[error("invalid region selection: expected a list of labels")]
    InvalidRegions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub selected_regions: Vec<String>,
}

impl FilterState {
    /// Full date span and every region present in `dataset`.
    #[must_use]
    pub fn defaults(dataset: &Dataset) -> Self {
        Self {
            start_date: dataset.min_date().map(midnight),
            end_date: dataset.max_date().map(midnight),
            selected_regions: dataset
                .regions()
                .into_iter()
                .map(|r| r.as_str().to_owned())
                .collect(),
        }
    }

    /// Build from raw control values as sent by the page.
    ///
    /// # Errors
    ///
    /// Returns an error if a date is neither `null` nor a date or timestamp string,
    /// or if the region value is not `null` or an array of strings.
    pub fn from_inputs(start: &Value, end: &Value, regions: &Value) -> Result<Self, FilterError> {
        Ok(Self {
            start_date: date_input(start)?,
            end_date: date_input(end)?,
            selected_regions: regions_input(regions)?,
        })
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return false;
        };
        let at = midnight(record.date);
        start <= at
            && at <= end
            && self
                .selected_regions
                .iter()
                .any(|r| r == record.region.as_str())
    }
}

#[must_use]
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Parse a date bound: `YYYY-MM-DD` (midnight) or a timestamp such as
/// `YYYY-MM-DDThh:mm[:ss[.fff]]`, with `T` or a space before the time.
///
/// # Errors
///
/// Returns `FilterError::InvalidDate` if no accepted format matches.
pub fn parse_bound(raw: &str) -> Result<NaiveDateTime, FilterError> {
    let trimmed = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok().map(midnight))
        .ok_or_else(|| FilterError::InvalidDate(raw.to_owned()))
}

fn date_input(value: &Value) -> Result<Option<NaiveDateTime>, FilterError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => parse_bound(s).map(Some),
        other => Err(FilterError::InvalidDate(other.to_string())),
    }
}

fn regions_input(value: &Value) -> Result<Vec<String>, FilterError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned).ok_or(FilterError::InvalidRegions))
            .collect(),
        _ => Err(FilterError::InvalidRegions),
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
