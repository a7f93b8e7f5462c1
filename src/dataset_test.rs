use super::*;
use crate::config::default_start_date;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn sample() -> Dataset {
    Dataset::generate_seeded(42, default_start_date(), 100)
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn generates_exactly_hundred_records() {
    assert_eq!(sample().len(), 100);
}

#[test]
fn dates_are_consecutive_days_from_start() {
    let ds = sample();
    for (i, record) in ds.records().iter().enumerate() {
        let expected = default_start_date() + chrono::Days::new(i as u64);
        assert_eq!(record.date, expected, "record {i}");
    }
    assert_eq!(ds.records().last().unwrap().date, NaiveDate::from_ymd_opt(2024, 4, 9).unwrap());
}

#[test]
fn sales_stay_within_bounds() {
    for seed in 0..20 {
        let ds = Dataset::generate_seeded(seed, default_start_date(), 100);
        assert!(ds.records().iter().all(|r| (SALES_MIN..SALES_MAX).contains(&r.sales)));
    }
}

#[test]
fn regions_are_from_the_fixed_label_set() {
    let ds = sample();
    assert!(ds.records().iter().all(|r| Region::ALL.contains(&r.region)));
}

#[test]
fn seeded_generation_is_reproducible() {
    assert_eq!(sample(), sample());
    assert_ne!(sample(), Dataset::generate_seeded(43, default_start_date(), 100));
}

#[test]
fn from_config_honours_seed_and_count() {
    let cfg = Config { record_count: 10, ..Config::default() }.with_seed(5);
    let ds = Dataset::from_config(&cfg);
    assert_eq!(ds.len(), 10);
    assert_eq!(ds, Dataset::generate_seeded(5, default_start_date(), 10));
}

#[test]
fn unseeded_generation_still_has_hundred_records() {
    let ds = Dataset::from_config(&Config::default());
    assert_eq!(ds.len(), 100);
    assert_eq!(ds.min_date(), Some(default_start_date()));
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn min_and_max_dates_span_the_series() {
    let ds = sample();
    assert_eq!(ds.min_date(), Some(day(1)));
    assert_eq!(ds.max_date(), NaiveDate::from_ymd_opt(2024, 4, 9));
}

#[test]
fn empty_dataset_has_no_dates() {
    let ds = Dataset::from_records(Vec::new());
    assert!(ds.is_empty());
    assert!(ds.min_date().is_none());
    assert!(ds.max_date().is_none());
    assert!(ds.regions().is_empty());
}

#[test]
fn regions_listed_in_first_appearance_order() {
    let ds = Dataset::from_records(vec![
        Record { date: day(1), sales: 100, region: Region::West },
        Record { date: day(2), sales: 200, region: Region::North },
        Record { date: day(3), sales: 300, region: Region::West },
        Record { date: day(4), sales: 400, region: Region::East },
    ]);
    assert_eq!(ds.regions(), vec![Region::West, Region::North, Region::East]);
}

#[test]
fn region_display_matches_label() {
    assert_eq!(Region::South.to_string(), "South");
    assert_eq!(serde_json::to_string(&Region::East).unwrap(), "\"East\"");
}

#[test]
fn record_serializes_date_as_iso_day() {
    let record = Record { date: day(3), sales: 123, region: Region::North };
    let json = serde_json::to_value(record).unwrap();
    assert_eq!(json["date"], "2024-01-03");
    assert_eq!(json["sales"], 123);
    assert_eq!(json["region"], "North");
}
