//! Line-chart description built from a filtered view.
//!
//! One trace per distinct region, in order of first appearance in the view,
//! each carrying that region's points in view order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dataset::{Record, Region};

pub const CHART_TITLE: &str = "Sales Over Time by Region";
pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "Sales";
pub const LEGEND_TITLE: &str = "Region";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    pub mode: String,
    pub x: Vec<NaiveDate>,
    pub y: Vec<u32>,
}

impl Trace {
    fn lines(region: Region) -> Self {
        Self { name: region.as_str().to_owned(), mode: "lines".into(), x: Vec::new(), y: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub legend_title: String,
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self {
            title: CHART_TITLE.into(),
            x_axis_title: X_AXIS_TITLE.into(),
            y_axis_title: Y_AXIS_TITLE.into(),
            legend_title: LEGEND_TITLE.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl Figure {
    /// Earliest and latest x value across all traces.
    #[must_use]
    pub fn x_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut xs = self.data.iter().flat_map(|t| t.x.iter().copied());
        let first = xs.next()?;
        Some(xs.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }

    /// Smallest and largest y value across all traces.
    #[must_use]
    pub fn y_range(&self) -> Option<(u32, u32)> {
        let mut ys = self.data.iter().flat_map(|t| t.y.iter().copied());
        let first = ys.next()?;
        Some(ys.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

/// Build the sales line chart for `view`. An empty view yields no traces.
#[must_use]
pub fn line_figure(view: &[&Record]) -> Figure {
    let mut data: Vec<Trace> = Vec::new();
    let mut order: Vec<Region> = Vec::new();

    for record in view {
        let idx = match order.iter().position(|r| *r == record.region) {
            Some(idx) => idx,
            None => {
                order.push(record.region);
                data.push(Trace::lines(record.region));
                data.len() - 1
            }
        };
        data[idx].x.push(record.date);
        data[idx].y.push(record.sales);
    }

    Figure { data, layout: FigureLayout::default() }
}

#[cfg(test)]
#[path = "figure_test.rs"]
mod tests;
