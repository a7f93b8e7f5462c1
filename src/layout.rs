//! Dashboard component tree.
//!
//! DESIGN
//! ======
//! The page is declared as a flat list of components, built once from the
//! dataset defaults. The same tree is served as JSON and rendered to HTML for
//! the initial page load; component ids double as callback endpoints.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::chart::escape;
use crate::dataset::Dataset;
use crate::filter::{DATE_FORMAT, FilterState};

pub const PAGE_TITLE: &str = "Sales Dashboard with Filters";
pub const DATE_RANGE_ID: &str = "date-range";
pub const REGION_DROPDOWN_ID: &str = "region-dropdown";
pub const GRAPH_ID: &str = "sales-graph";

// =============================================================================
// COMPONENTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Component {
    H1 {
        text: String,
    },
    DatePickerRange {
        id: String,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        display_format: String,
    },
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        value: Vec<String>,
        multi: bool,
    },
    Graph {
        id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub children: Vec<Component>,
}

impl Layout {
    /// Title, date-range picker, region multi-select, and chart area, all
    /// defaulting to `defaults`.
    #[must_use]
    pub fn new(dataset: &Dataset, defaults: &FilterState) -> Self {
        let options = dataset
            .regions()
            .into_iter()
            .map(|r| DropdownOption { label: r.as_str().to_owned(), value: r.as_str().to_owned() })
            .collect();

        Self {
            children: vec![
                Component::H1 { text: PAGE_TITLE.into() },
                Component::DatePickerRange {
                    id: DATE_RANGE_ID.into(),
                    start_date: defaults.start_date.map(|dt| dt.date()),
                    end_date: defaults.end_date.map(|dt| dt.date()),
                    display_format: "YYYY-MM-DD".into(),
                },
                Component::Dropdown {
                    id: REGION_DROPDOWN_ID.into(),
                    options,
                    value: defaults.selected_regions.clone(),
                    multi: true,
                },
                Component::Graph { id: GRAPH_ID.into() },
            ],
        }
    }

    /// Render the component tree as HTML, placing `graph_svg` in the chart area.
    #[must_use]
    pub fn render_html(&self, graph_svg: &str) -> String {
        let mut out = String::with_capacity(2048 + graph_svg.len());
        self.children
            .iter()
            .try_for_each(|c| c.write_html(&mut out, graph_svg))
            .map(|()| out)
            .unwrap_or_default()
    }
}

impl Component {
    fn write_html(&self, out: &mut String, graph_svg: &str) -> std::fmt::Result {
        match self {
            Self::H1 { text } => write!(out, "<h1>{}</h1>", escape(text)),
            Self::DatePickerRange { id, start_date, end_date, .. } => {
                let id = escape(id);
                write!(
                    out,
                    r#"<div class="date-range" id="{id}"><input type="date" id="{id}-start" name="start_date" value="{}"> <span>&rarr;</span> <input type="date" id="{id}-end" name="end_date" value="{}"></div>"#,
                    date_value(*start_date),
                    date_value(*end_date)
                )
            }
            Self::Dropdown { id, options, value, multi } => {
                let multiple = if *multi { " multiple" } else { "" };
                write!(out, r#"<select id="{}"{multiple}"#, escape(id))?;
                if !options.is_empty() {
                    write!(out, r#" size="{}""#, options.len())?;
                }
                out.push('>');
                for opt in options {
                    let selected = if value.contains(&opt.value) { " selected" } else { "" };
                    write!(
                        out,
                        r#"<option value="{}"{selected}>{}</option>"#,
                        escape(&opt.value),
                        escape(&opt.label)
                    )?;
                }
                out.push_str("</select>");
                Ok(())
            }
            Self::Graph { id } => write!(out, r#"<div class="graph" id="{}">{graph_svg}</div>"#, escape(id)),
        }
    }
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
