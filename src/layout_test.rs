use super::*;
use crate::config::default_start_date;

fn sample() -> (Dataset, FilterState) {
    let ds = Dataset::generate_seeded(21, default_start_date(), 100);
    let defaults = FilterState::defaults(&ds);
    (ds, defaults)
}

#[test]
fn layout_has_title_picker_dropdown_and_graph() {
    let (ds, defaults) = sample();
    let layout = Layout::new(&ds, &defaults);
    assert_eq!(layout.children.len(), 4);
    assert!(matches!(&layout.children[0], Component::H1 { text } if text == PAGE_TITLE));
    assert!(matches!(&layout.children[3], Component::Graph { id } if id == GRAPH_ID));
}

#[test]
fn picker_defaults_to_full_span() {
    let (ds, defaults) = sample();
    let layout = Layout::new(&ds, &defaults);
    let Component::DatePickerRange { start_date, end_date, display_format, .. } = &layout.children[1] else {
        panic!("expected date picker");
    };
    assert_eq!(*start_date, ds.min_date());
    assert_eq!(*end_date, ds.max_date());
    assert_eq!(display_format, "YYYY-MM-DD");
}

#[test]
fn dropdown_offers_and_selects_every_region() {
    let (ds, defaults) = sample();
    let layout = Layout::new(&ds, &defaults);
    let Component::Dropdown { options, value, multi, .. } = &layout.children[2] else {
        panic!("expected dropdown");
    };
    assert!(*multi);
    assert_eq!(options.len(), ds.regions().len());
    let option_values: Vec<&String> = options.iter().map(|o| &o.value).collect();
    assert_eq!(option_values, value.iter().collect::<Vec<_>>());
}

#[test]
fn serializes_with_component_type_tags() {
    let (ds, defaults) = sample();
    let json = serde_json::to_value(Layout::new(&ds, &defaults)).unwrap();
    assert_eq!(json["children"][0]["type"], "H1");
    assert_eq!(json["children"][1]["type"], "DatePickerRange");
    assert_eq!(json["children"][1]["id"], DATE_RANGE_ID);
    assert_eq!(json["children"][1]["start_date"], "2024-01-01");
    assert_eq!(json["children"][2]["multi"], true);
    assert_eq!(json["children"][3]["id"], GRAPH_ID);
}

#[test]
fn html_contains_controls_and_graph_body() {
    let (ds, defaults) = sample();
    let html = Layout::new(&ds, &defaults).render_html("<svg>chart</svg>");
    assert!(html.contains("<h1>Sales Dashboard with Filters</h1>"));
    assert!(html.contains(r#"id="date-range-start" name="start_date" value="2024-01-01""#));
    assert!(html.contains(r#"id="date-range-end" name="end_date" value="2024-04-09""#));
    assert!(html.contains(r#"<select id="region-dropdown" multiple"#));
    assert_eq!(html.matches(" selected>").count(), ds.regions().len());
    assert!(html.contains(r#"<div class="graph" id="sales-graph"><svg>chart</svg></div>"#));
}

#[test]
fn unset_dates_render_empty_inputs() {
    let (ds, mut defaults) = sample();
    defaults.start_date = None;
    let html = Layout::new(&ds, &defaults).render_html("");
    assert!(html.contains(r#"name="start_date" value="""#));
}

#[test]
fn dropdown_size_tracks_option_count() {
    let (ds, defaults) = sample();
    let html = Layout::new(&ds, &defaults).render_html("");
    assert!(html.contains(&format!(r#"<select id="region-dropdown" multiple size="{}">"#, ds.regions().len())));
}

#[test]
fn empty_dataset_dropdown_has_no_size() {
    let ds = Dataset::from_records(Vec::new());
    let defaults = FilterState::defaults(&ds);
    let html = Layout::new(&ds, &defaults).render_html("");
    assert!(html.contains(r#"<select id="region-dropdown" multiple></select>"#));
    assert!(!html.contains("size="));
}
