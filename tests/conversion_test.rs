//! End-to-end pipeline tests: raw string through validation, normalization,
//! instant construction and zone projection.

use pretty_assertions::assert_eq;
use timezoner::config::Config;
use timezoner::time::{normalize, validate, Instant};
use timezoner::zones::{project, resolve_anchor, TableKind, ZoneEntry, ZoneRule, ZoneTable};

fn rendered_rows(rows: Vec<timezoner::zones::ZoneRow>) -> Vec<(String, String)> {
    rows.into_iter().map(|r| (r.label, r.time.to_string())).collect()
}

#[test]
fn legacy_fixed_offset_scenario() {
    // "9:00 PM" with the legacy CST/PST deltas anchored on Mountain must
    // come out as MST 21:00, CST 22:00, PST 20:00.
    let raw = "9:00 PM";
    validate(raw).unwrap();
    let normalized = normalize(raw);
    assert_eq!(normalized, "21:00");

    let anchor = resolve_anchor("Mountain").unwrap();
    let table = timezoner::zones::OffsetTable::new(
        TableKind::Standard,
        vec![ZoneEntry::fixed("CST", 1, 0), ZoneEntry::fixed("PST", -1, 0)],
    )
    .to_zone_table(&anchor);

    let instant = Instant::build(&normalized, ZoneRule::anchor_default()).unwrap();
    assert_eq!(
        rendered_rows(project(&instant, &table)),
        vec![
            ("MST".to_string(), "21:00".to_string()),
            ("CST".to_string(), "22:00".to_string()),
            ("PST".to_string(), "20:00".to_string()),
        ]
    );
}

#[test]
fn default_standard_table_end_to_end() {
    let anchor = resolve_anchor("Mountain").unwrap();
    let config = Config::default();
    let table = config.offset_table(TableKind::Standard).to_zone_table(&anchor);

    let normalized = normalize("9:00 PM");
    let instant = Instant::build(&normalized, ZoneRule::anchor_default()).unwrap();

    assert_eq!(
        rendered_rows(project(&instant, &table)),
        vec![
            ("MST".to_string(), "21:00".to_string()),
            ("CST".to_string(), "22:00".to_string()),
            ("EST".to_string(), "23:00".to_string()),
            ("PST".to_string(), "20:00".to_string()),
            ("IST".to_string(), "09:30".to_string()),
            ("GMT".to_string(), "04:00".to_string()),
            ("UTC".to_string(), "04:00".to_string()),
        ]
    );
}

#[test]
fn named_zone_projection_tracks_real_offsets() {
    // Mountain, Pacific and Eastern transition on the same dates, so the
    // relative offsets hold on any day the test runs.
    let table = ZoneTable::named(
        "MST".to_string(),
        vec![
            ZoneEntry::named("America/Los_Angeles", chrono_tz::America::Los_Angeles),
            ZoneEntry::named("America/New_York", chrono_tz::America::New_York),
        ],
    )
    .unwrap();

    let instant =
        Instant::build("21:00", ZoneRule::NamedZone(chrono_tz::America::Denver)).unwrap();
    let rows = project(&instant, &table);

    let times: Vec<String> = rows.iter().map(|r| r.time.to_string()).collect();
    assert_eq!(times, vec!["21:00", "20:00", "23:00"]);

    for (row, (std_abbrev, dst_abbrev)) in
        rows.iter().zip([("MST", "MDT"), ("PST", "PDT"), ("EST", "EDT")])
    {
        assert!(
            row.label == std_abbrev || row.label == dst_abbrev,
            "unexpected label {}",
            row.label
        );
    }
}

#[test]
fn projection_row_count_and_order_for_default_config() {
    let anchor = resolve_anchor("Mountain").unwrap();
    let config = Config::default();

    for kind in [TableKind::Standard, TableKind::Daylight] {
        let offsets = config.offset_table(kind);
        let expected_labels: Vec<String> =
            offsets.entries.iter().map(|e| e.label.clone()).collect();
        let table = offsets.to_zone_table(&anchor);

        let instant = Instant::build("12:00", ZoneRule::anchor_default()).unwrap();
        let rows = project(&instant, &table);

        assert_eq!(rows.len(), expected_labels.len() + 1);
        let labels: Vec<String> = rows.into_iter().skip(1).map(|r| r.label).collect();
        assert_eq!(labels, expected_labels);
    }
}

#[test]
fn every_accepted_input_converts_without_error() {
    let anchor = resolve_anchor("Mountain").unwrap();
    let config = Config::default();
    let table = config.offset_table(TableKind::Standard).to_zone_table(&anchor);

    let inputs = [
        "21:00", "9:00 PM", "9:00PM", "09:00", "12:00 AM", "12:00 PM", "0:00", "23:59",
        "1:05 am", "11:59 pm",
    ];
    for raw in inputs {
        validate(raw).unwrap();
        let normalized = normalize(raw);
        let instant = Instant::build(&normalized, ZoneRule::anchor_default())
            .unwrap_or_else(|e| panic!("'{}' failed after validation: {}", raw, e));
        assert_eq!(project(&instant, &table).len(), table.len() + 1);
    }
}

#[test]
fn rejected_inputs_never_reach_projection() {
    for raw in ["24:00", "13:00 AM", "000:004", "12:68 PM", "", "9:00 XM"] {
        assert!(validate(raw).is_err(), "expected '{}' to be rejected", raw);
    }
}

#[test]
fn twelve_hour_edge_cases_round_the_clock() {
    let cases = [
        ("12:00 AM", "0:00"),
        ("12:30 AM", "0:30"),
        ("12:00 PM", "12:00"),
        ("12:30 PM", "12:30"),
        ("1:00 AM", "1:00"),
        ("1:00 PM", "13:00"),
        ("11:59 PM", "23:59"),
    ];
    for (raw, expected) in cases {
        validate(raw).unwrap();
        assert_eq!(normalize(raw), expected, "normalizing '{}'", raw);
    }
}
