// ABOUTME: Integration tests for the child record response formatter
// ABOUTME: Verifies stored/projected field pairing and variant-dependent JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mumpa Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use mumpa_admin::formatters::ChildAgeResponse;
use mumpa_admin::models::{AgeEntry, ChildRecord};

fn reference_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn born_record(age_months: u32, days_ago: i64) -> ChildRecord {
    ChildRecord {
        id: "child_42".to_owned(),
        name: Some("Nour".to_owned()),
        age: AgeEntry::Born { age_months },
        created_at: reference_now() - Duration::days(days_ago),
    }
}

fn unborn_record(gestation_weeks: u32, days_ago: i64) -> ChildRecord {
    ChildRecord {
        id: "child_43".to_owned(),
        name: None,
        age: AgeEntry::Unborn { gestation_weeks },
        created_at: reference_now() - Duration::days(days_ago),
    }
}

#[test]
fn test_born_response_pairs_stored_and_projected() {
    let response = ChildAgeResponse::from_record(&born_record(11, 61), reference_now());

    assert_eq!(response.age_in_months, Some(11));
    assert_eq!(response.current_age_in_months, Some(13));
    assert_eq!(response.days_since_creation, 61);
    assert_eq!(response.gestation_weeks, None);
    assert_eq!(response.current_gestation_weeks, None);
    assert_eq!(response.is_overdue, None);
}

#[test]
fn test_unborn_response_pairs_stored_and_projected() {
    let response = ChildAgeResponse::from_record(&unborn_record(39, 14), reference_now());

    assert_eq!(response.gestation_weeks, Some(39));
    assert_eq!(response.current_gestation_weeks, Some(41));
    assert_eq!(response.is_overdue, Some(false));
    assert_eq!(response.age_in_months, None);
    assert_eq!(response.current_age_in_months, None);
}

#[test]
fn test_born_json_uses_api_field_names_and_omits_gestation() {
    let response = ChildAgeResponse::from_record(&born_record(11, 61), reference_now());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["ageInMonths"], 11);
    assert_eq!(json["currentAgeInMonths"], 13);
    assert_eq!(json["daysSinceCreation"], 61);
    assert_eq!(json["name"], "Nour");

    let object = json.as_object().unwrap();
    assert!(!object.contains_key("gestationWeeks"));
    assert!(!object.contains_key("currentGestationWeeks"));
    assert!(!object.contains_key("isOverdue"));
}

#[test]
fn test_unborn_json_includes_overdue_and_omits_age() {
    let response = ChildAgeResponse::from_record(&unborn_record(40, 21), reference_now());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["gestationWeeks"], 40);
    assert_eq!(json["currentGestationWeeks"], 42);
    assert_eq!(json["isOverdue"], true);

    let object = json.as_object().unwrap();
    assert!(!object.contains_key("ageInMonths"));
    assert!(!object.contains_key("currentAgeInMonths"));
    assert!(!object.contains_key("name"));
}

#[test]
fn test_response_reflects_the_supplied_clock() {
    let record = born_record(11, 61);

    let at_creation = ChildAgeResponse::from_record(&record, record.created_at);
    assert_eq!(at_creation.current_age_in_months, Some(11));

    let later = ChildAgeResponse::from_record(&record, reference_now() + Duration::days(30));
    assert_eq!(later.current_age_in_months, Some(13));
    assert_eq!(later.days_since_creation, 91);
}
