//! SVG rendering for line-chart figures.
//!
//! DESIGN
//! ======
//! The chart is drawn server-side so the page needs no charting library and
//! fetches no external assets. The output is a self-contained `<svg>` element
//! with a title, both axes with tick labels, one polyline per trace, and a
//! legend. Output depends only on the figure, so equal figures render to
//! byte-identical SVG.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::figure::Figure;

pub const WIDTH: f64 = 900.0;
pub const HEIGHT: f64 = 450.0;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 130.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;

const X_TICKS: i64 = 6;
const Y_STEP: u32 = 100;

/// Trace colours, assigned by trace index.
pub const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880", "#ff97ff",
    "#fecb52",
];

#[must_use]
pub fn trace_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Render `figure` as an SVG document fragment.
#[must_use]
pub fn render_svg(figure: &Figure) -> String {
    let mut out = String::with_capacity(4096);
    write_svg(&mut out, figure).map(|()| out).unwrap_or_default()
}

// =============================================================================
// SCALES
// =============================================================================

struct Plot {
    x0: NaiveDate,
    x_span: i64,
    y0: u32,
    y1: u32,
}

impl Plot {
    fn from_figure(figure: &Figure) -> Option<Self> {
        let (x0, x1) = figure.x_range()?;
        let (lo, hi) = figure.y_range()?;
        let y0 = lo / Y_STEP * Y_STEP;
        let mut y1 = hi.div_ceil(Y_STEP) * Y_STEP;
        if y1 <= y0 {
            y1 = y0 + Y_STEP;
        }
        Some(Self { x0, x_span: (x1 - x0).num_days(), y0, y1 })
    }

    #[allow(clippy::cast_precision_loss)]
    fn px(&self, date: NaiveDate) -> f64 {
        let inner = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        if self.x_span == 0 {
            return MARGIN_LEFT + inner / 2.0;
        }
        MARGIN_LEFT + inner * ((date - self.x0).num_days() as f64) / (self.x_span as f64)
    }

    fn py(&self, value: u32) -> f64 {
        let inner = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let frac = f64::from(value - self.y0) / f64::from(self.y1 - self.y0);
        HEIGHT - MARGIN_BOTTOM - inner * frac
    }

    fn x_ticks(&self) -> Vec<NaiveDate> {
        if self.x_span == 0 {
            return vec![self.x0];
        }
        let steps = X_TICKS.min(self.x_span);
        let mut ticks: Vec<NaiveDate> = (0..=steps)
            .map(|i| self.x0 + chrono::Duration::days(self.x_span * i / steps))
            .collect();
        ticks.dedup();
        ticks
    }

    fn y_ticks(&self) -> impl Iterator<Item = u32> + '_ {
        (self.y0..=self.y1).step_by(Y_STEP as usize)
    }
}

// =============================================================================
// DRAWING
// =============================================================================

fn write_svg(out: &mut String, figure: &Figure) -> std::fmt::Result {
    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" font-family="sans-serif">"#
    )?;
    write!(out, r##"<rect x="0" y="0" width="{WIDTH}" height="{HEIGHT}" fill="#ffffff"/>"##)?;
    write!(
        out,
        r##"<rect x="{left}" y="{top}" width="{}" height="{}" fill="#e5ecf6"/>"##,
        right - left,
        bottom - top
    )?;
    write!(
        out,
        r#"<text class="chart-title" x="{left}" y="35" font-size="18">{}</text>"#,
        escape(&figure.layout.title)
    )?;

    match Plot::from_figure(figure) {
        Some(plot) => {
            write_axes(out, &plot)?;
            write_traces(out, figure, &plot)?;
            write_legend(out, figure)?;
        }
        None => {
            write!(
                out,
                r##"<text class="no-data" x="{}" y="{}" font-size="14" fill="#666666" text-anchor="middle">No data</text>"##,
                (left + right) / 2.0,
                (top + bottom) / 2.0
            )?;
        }
    }

    write!(
        out,
        r#"<text x="{}" y="{}" font-size="13" text-anchor="middle">{}</text>"#,
        (left + right) / 2.0,
        HEIGHT - 15.0,
        escape(&figure.layout.x_axis_title)
    )?;
    write!(
        out,
        r#"<text x="20" y="{y}" font-size="13" text-anchor="middle" transform="rotate(-90 20 {y})">{}</text>"#,
        escape(&figure.layout.y_axis_title),
        y = (top + bottom) / 2.0
    )?;
    out.push_str("</svg>");
    Ok(())
}

fn write_axes(out: &mut String, plot: &Plot) -> std::fmt::Result {
    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    for value in plot.y_ticks() {
        let y = plot.py(value);
        write!(out, r##"<line x1="{left}" y1="{y:.1}" x2="{right}" y2="{y:.1}" stroke="#ffffff"/>"##)?;
        write!(
            out,
            r#"<text x="{}" y="{:.1}" font-size="11" text-anchor="end">{value}</text>"#,
            left - 6.0,
            y + 4.0
        )?;
    }
    for date in plot.x_ticks() {
        let x = plot.px(date);
        write!(out, r##"<line x1="{x:.1}" y1="{}" x2="{x:.1}" y2="{bottom}" stroke="#ffffff"/>"##, MARGIN_TOP)?;
        write!(
            out,
            r#"<text class="x-tick" x="{x:.1}" y="{}" font-size="11" text-anchor="middle">{}</text>"#,
            bottom + 16.0,
            date.format("%b %d")
        )?;
    }
    Ok(())
}

fn write_traces(out: &mut String, figure: &Figure, plot: &Plot) -> std::fmt::Result {
    for (i, trace) in figure.data.iter().enumerate() {
        write!(
            out,
            r#"<polyline class="trace" data-name="{}" fill="none" stroke="{}" stroke-width="2" points=""#,
            escape(&trace.name),
            trace_color(i)
        )?;
        for (n, (date, sales)) in trace.x.iter().zip(&trace.y).enumerate() {
            if n > 0 {
                out.push(' ');
            }
            write!(out, "{:.1},{:.1}", plot.px(*date), plot.py(*sales))?;
        }
        out.push_str(r#""/>"#);
    }
    Ok(())
}

fn write_legend(out: &mut String, figure: &Figure) -> std::fmt::Result {
    let x = WIDTH - MARGIN_RIGHT + 15.0;
    write!(
        out,
        r#"<text x="{x}" y="{}" font-size="12">{}</text>"#,
        MARGIN_TOP + 10.0,
        escape(&figure.layout.legend_title)
    )?;
    for (i, trace) in figure.data.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = MARGIN_TOP + 30.0 + 20.0 * i as f64;
        write!(
            out,
            r#"<line x1="{x}" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-width="2"/>"#,
            x + 20.0,
            trace_color(i)
        )?;
        write!(
            out,
            r#"<text class="legend-item" x="{}" y="{}" font-size="12">{}</text>"#,
            x + 26.0,
            y + 4.0,
            escape(&trace.name)
        )?;
    }
    Ok(())
}

/// Escape text for use in XML/HTML content and attribute values.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "chart_test.rs"]
mod tests;
