//! The dashboard page.
//!
//! The initial chart is rendered into the page; after that the inline script
//! posts the control values for each registered dependency and replaces the
//! chart area with the SVG it gets back.

use axum::extract::State;
use axum::response::Html;

use crate::layout::PAGE_TITLE;
use crate::state::AppState;

const STYLE: &str = r"
body { font-family: sans-serif; margin: 2rem; color: #2a3f5f; }
.date-range, select { margin: 0.5rem 0; }
select { min-width: 12rem; }
.graph { margin-top: 1rem; }
";

const SCRIPT: &str = r#"
(function () {
  const value = (id) => document.getElementById(id).value || null;
  const readers = {
    "date-range.start_date": () => value("date-range-start"),
    "date-range.end_date": () => value("date-range-end"),
    "region-dropdown.value": () =>
      Array.from(document.getElementById("region-dropdown").selectedOptions, (o) => o.value),
  };

  async function refresh(dep) {
    const inputs = dep.inputs.map((ep) => ({
      id: ep.id,
      property: ep.property,
      value: readers[ep.id + "." + ep.property]?.() ?? null,
    }));
    const res = await fetch("/api/update", {
      method: "POST",
      headers: { "content-type": "application/json" },
      body: JSON.stringify({ output: dep.output.id + "." + dep.output.property, inputs }),
    });
    const body = await res.json();
    if (!res.ok) {
      console.error("update failed", body.error);
      return;
    }
    document.getElementById(dep.output.id).innerHTML = body.svg;
  }

  fetch("/api/dependencies")
    .then((res) => res.json())
    .then((deps) => {
      for (const dep of deps) {
        const ids = new Set(dep.inputs.map((ep) => ep.id));
        for (const el of document.querySelectorAll("input, select")) {
          const owner = el.parentElement?.closest("[id]");
          if (ids.has(el.id) || (owner && ids.has(owner.id))) {
            el.addEventListener("change", () => refresh(dep));
          }
        }
      }
    });
})();
"#;

/// `GET /` — the full dashboard page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let chart = state.dashboard.initial_chart();
    Html(render_page(&state.dashboard.layout().render_html(&chart.svg)))
}

fn render_page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{PAGE_TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n<script>{SCRIPT}</script>\n</body>\n</html>\n"
    )
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
