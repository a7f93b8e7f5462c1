use super::*;
use crate::config::default_start_date;
use crate::dataset::Dataset;
use crate::filter::FilterState;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn rec(d: u32, sales: u32, region: Region) -> Record {
    Record { date: day(d), sales, region }
}

#[test]
fn empty_view_has_no_series_but_keeps_layout() {
    let fig = line_figure(&[]);
    assert!(fig.data.is_empty());
    assert_eq!(fig.layout.title, "Sales Over Time by Region");
    assert_eq!(fig.layout.x_axis_title, "Date");
    assert_eq!(fig.layout.y_axis_title, "Sales");
    assert!(fig.x_range().is_none());
    assert!(fig.y_range().is_none());
}

#[test]
fn one_trace_per_region_in_first_appearance_order() {
    let records = [
        rec(1, 150, Region::South),
        rec(2, 250, Region::North),
        rec(3, 350, Region::South),
        rec(4, 450, Region::West),
    ];
    let view: Vec<&Record> = records.iter().collect();
    let fig = line_figure(&view);

    let names: Vec<&str> = fig.data.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["South", "North", "West"]);

    let south = &fig.data[0];
    assert_eq!(south.x, vec![day(1), day(3)]);
    assert_eq!(south.y, vec![150, 350]);
    assert_eq!(south.mode, "lines");
    assert_eq!(south.x.len(), 2);
}

#[test]
fn points_cover_the_whole_view() {
    let ds = Dataset::generate_seeded(3, default_start_date(), 100);
    let view = ds.filter(&FilterState::defaults(&ds));
    let fig = line_figure(&view);
    let total: usize = fig.data.iter().map(|t| t.x.len()).sum();
    assert_eq!(total, 100);
    assert_eq!(fig.data.len(), ds.regions().len());
    assert!(fig.data.iter().all(|t| !t.x.is_empty() && t.x.len() == t.y.len()));
}

#[test]
fn ranges_span_all_traces() {
    let records = [rec(5, 410, Region::East), rec(2, 120, Region::North), rec(9, 300, Region::East)];
    let view: Vec<&Record> = records.iter().collect();
    let fig = line_figure(&view);
    assert_eq!(fig.x_range(), Some((day(2), day(9))));
    assert_eq!(fig.y_range(), Some((120, 410)));
}

#[test]
fn rebuilding_is_idempotent() {
    let ds = Dataset::generate_seeded(11, default_start_date(), 100);
    let filter = FilterState::defaults(&ds);
    assert_eq!(line_figure(&ds.filter(&filter)), line_figure(&ds.filter(&filter)));
}

#[test]
fn serializes_dates_as_iso_days() {
    let records = [rec(1, 100, Region::North)];
    let view: Vec<&Record> = records.iter().collect();
    let json = serde_json::to_value(line_figure(&view)).unwrap();
    assert_eq!(json["data"][0]["x"][0], "2024-01-01");
    assert_eq!(json["data"][0]["y"][0], 100);
    assert_eq!(json["layout"]["title"], "Sales Over Time by Region");
}
