//! Tests for timestamp canonicalization.

use chrono::NaiveDate;
use navlog_transform::{TransformError, canonicalize_timestamp, parse_timestamp};

fn canonical(value: &str) -> String {
    canonicalize_timestamp(value).unwrap_or_else(|err| panic!("{value}: {err}"))
}

#[test]
fn iso_variants() {
    assert_eq!(canonical("2021-03-04T10:11:12"), "2021-03-04T10:11:12.000Z");
    assert_eq!(canonical("2021-03-04T10:11:12Z"), "2021-03-04T10:11:12.000Z");
    assert_eq!(canonical("2021-03-04T10:11:12.123Z"), "2021-03-04T10:11:12.123Z");
    assert_eq!(canonical("2021-03-04 10:11:12.123456789"), "2021-03-04T10:11:12.123Z");
    assert_eq!(canonical("2021-03-04T10:11"), "2021-03-04T10:11:00.000Z");
    assert_eq!(canonical("20210304T101112"), "2021-03-04T10:11:12.000Z");
    assert_eq!(canonical("2021-03-04"), "2021-03-04T00:00:00.000Z");
}

#[test]
fn offsets_are_converted_to_utc() {
    assert_eq!(canonical("2021-03-04T10:11:12+02:00"), "2021-03-04T08:11:12.000Z");
    assert_eq!(canonical("2021-03-04 10:11:12.5-0100"), "2021-03-04T11:11:12.500Z");
    assert_eq!(canonical("Thu, 04 Mar 2021 10:11:12 +0000"), "2021-03-04T10:11:12.000Z");
}

#[test]
fn utc_labels_are_accepted() {
    assert_eq!(canonical("2021-03-04 10:11:12 UTC"), "2021-03-04T10:11:12.000Z");
    assert_eq!(canonical("2021-03-04 10:11:12Z"), "2021-03-04T10:11:12.000Z");
}

#[test]
fn locale_layouts() {
    assert_eq!(canonical("03/04/2021 10:11:12"), "2021-03-04T10:11:12.000Z");
    assert_eq!(canonical("03/04/2021 10:11:12 PM"), "2021-03-04T22:11:12.000Z");
    assert_eq!(canonical("13/04/2021 10:11"), "2021-04-13T10:11:00.000Z");
    assert_eq!(canonical("04-Mar-2021 10:11:12"), "2021-03-04T10:11:12.000Z");
    assert_eq!(canonical("March 4, 2021"), "2021-03-04T00:00:00.000Z");
    assert_eq!(canonical("04.03.2021 10:11:12"), "2021-03-04T10:11:12.000Z");
    assert_eq!(canonical("2021/03/04 10:11:12.0042"), "2021-03-04T10:11:12.004Z");
}

#[test]
fn iso_comma_fraction_and_hour_offset() {
    assert_eq!(canonical("2021-03-04T10:11:12,123"), "2021-03-04T10:11:12.123Z");
    assert_eq!(canonical("2021-03-04T10:11:12+05"), "2021-03-04T05:11:12.000Z");
    assert_eq!(canonical("2021-03-04T10:11:12,5-03"), "2021-03-04T13:11:12.500Z");
}

#[test]
fn twelve_hour_clock_and_optional_seconds() {
    assert_eq!(canonical("2021-03-04 10:11:12 PM"), "2021-03-04T22:11:12.000Z");
    assert_eq!(canonical("2021-03-04 12:05 am"), "2021-03-04T00:05:00.000Z");
    assert_eq!(canonical("March 4, 2021 10:11"), "2021-03-04T10:11:00.000Z");
    assert_eq!(canonical("4 Mar 2021 10:11"), "2021-03-04T10:11:00.000Z");
}

#[test]
fn dashed_numeric_dates_are_month_first() {
    assert_eq!(canonical("04-03-2021 10:11:12"), "2021-04-03T10:11:12.000Z");
    assert_eq!(canonical("25-03-2021 10:11:12"), "2021-03-25T10:11:12.000Z");
    assert_eq!(canonical("04-03-2021"), "2021-04-03T00:00:00.000Z");
}

#[test]
fn canonical_output_is_a_fixed_point() {
    let once = canonical("2021-03-04T10:11:12.123456");
    assert_eq!(canonical(&once), once);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(
        parse_timestamp("  2021-03-04 10:11:12 "),
        NaiveDate::from_ymd_opt(2021, 3, 4).and_then(|d| d.and_hms_opt(10, 11, 12))
    );
}

#[test]
fn unparseable_values_fail() {
    for value in ["yesterday", "2021-13-01", "31/31/2021", "12:00"] {
        assert_eq!(
            canonicalize_timestamp(value),
            Err(TransformError::Timestamp {
                value: value.to_string()
            })
        );
    }
}
