//! The dashboard: dataset, defaults, layout, and the chart callback.
//!
//! DESIGN
//! ======
//! `Dashboard::new` performs all startup work: it derives the default filter
//! from the dataset, builds the layout, and subscribes the graph callback.
//! After that the dashboard is read-only. Recomputing the chart is a pure
//! function of the dataset and the filter the page sends.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::callback::{CallbackError, CallbackRegistry, Dependency, Endpoint, UpdateRequest};
use crate::chart::render_svg;
use crate::config::Config;
use crate::dataset::Dataset;
use crate::figure::{Figure, line_figure};
use crate::filter::FilterState;
use crate::layout::{DATE_RANGE_ID, GRAPH_ID, Layout, REGION_DROPDOWN_ID};

pub const GRAPH_PROPERTY: &str = "figure";

/// Chart output for one filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartUpdate {
    pub figure: Figure,
    pub svg: String,
}

pub struct Dashboard {
    dataset: Dataset,
    defaults: FilterState,
    layout: Layout,
    callbacks: CallbackRegistry<Dataset>,
}

impl Dashboard {
    /// # Errors
    ///
    /// Returns an error if callback registration fails.
    pub fn new(dataset: Dataset) -> Result<Self, CallbackError> {
        if dataset.is_empty() {
            warn!("dataset has no records; the chart will be empty");
        }
        let defaults = FilterState::defaults(&dataset);
        let layout = Layout::new(&dataset, &defaults);

        let mut callbacks = CallbackRegistry::new();
        callbacks.subscribe(
            Endpoint::new(GRAPH_ID, GRAPH_PROPERTY),
            vec![
                Endpoint::new(DATE_RANGE_ID, "start_date"),
                Endpoint::new(DATE_RANGE_ID, "end_date"),
                Endpoint::new(REGION_DROPDOWN_ID, "value"),
            ],
            update_graph_handler,
        )?;

        debug!(records = dataset.len(), regions = defaults.selected_regions.len(), "dashboard initialized");
        Ok(Self { dataset, defaults, layout, callbacks })
    }

    /// # Errors
    ///
    /// Returns an error if callback registration fails.
    pub fn from_config(config: &Config) -> Result<Self, CallbackError> {
        Self::new(Dataset::from_config(config))
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn defaults(&self) -> &FilterState {
        &self.defaults
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn dependencies(&self) -> Vec<&Dependency> {
        self.callbacks.dependencies()
    }

    #[must_use]
    pub fn update_graph(&self, filter: &FilterState) -> ChartUpdate {
        chart_for(self.dataset(), filter)
    }

    /// Chart for the default filter, shown on first page load.
    #[must_use]
    pub fn initial_chart(&self) -> ChartUpdate {
        self.update_graph(self.defaults())
    }

    /// # Errors
    ///
    /// See [`CallbackRegistry::dispatch`].
    pub fn dispatch(&self, request: &UpdateRequest) -> Result<Value, CallbackError> {
        self.callbacks.dispatch(&self.dataset, request)
    }
}

#[must_use]
pub fn chart_for(dataset: &Dataset, filter: &FilterState) -> ChartUpdate {
    let view = dataset.filter(filter);
    let figure = line_figure(&view);
    let svg = render_svg(&figure);
    ChartUpdate { figure, svg }
}

fn update_graph_handler(dataset: &Dataset, values: &[Value]) -> Result<Value, CallbackError> {
    let [start, end, regions] = values else {
        return Err(CallbackError::MissingInput(format!("{REGION_DROPDOWN_ID}.value")));
    };
    let filter = FilterState::from_inputs(start, end, regions)?;
    let update = chart_for(dataset, &filter);
    debug!(traces = update.figure.data.len(), "graph recomputed");
    Ok(serde_json::to_value(update)?)
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
