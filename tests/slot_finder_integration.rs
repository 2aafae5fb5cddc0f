//! End-to-end: fixture file -> parse -> repository -> slot finder -> JSON.

use std::path::PathBuf;

use chrono::DateTime;

use pas_rust::api::{Roster, SlotDuration};
use pas_rust::db::{RepositoryFactory, RosterRepository};
use pas_rust::models::{parse_roster_json_str, Timestamp};
use pas_rust::services::collect_available_slots;

const EXPECTED_ROSTER_CHECKSUM: &str =
    "62a60010a14db9e1785137417bbdd7471c3b8d8e7e9bce21354d7eec3357024b";

fn repo_data_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(file_name)
}

fn parse_roster_fixture() -> Roster {
    let roster_path = repo_data_path("roster.json");
    parse_roster_json_str(
        &std::fs::read_to_string(&roster_path).expect("Failed to read roster fixture"),
    )
    .expect("Failed to parse roster fixture")
}

fn ts(s: &str) -> Timestamp {
    DateTime::parse_from_rfc3339(s).expect("valid RFC 3339 timestamp")
}

#[test]
fn fixture_parses_with_pinned_checksum() {
    let roster = parse_roster_fixture();

    assert_eq!(roster.photographers.len(), 3);
    assert_eq!(roster.checksum, EXPECTED_ROSTER_CHECKSUM);

    let jens = &roster.photographers[1];
    assert_eq!(jens.name, "Jens Mills");
    assert_eq!(jens.availabilities.len(), 2);
    assert_eq!(jens.bookings.len(), 2);
    assert_eq!(jens.bookings[0].id.as_deref(), Some("booking-102"));
}

#[tokio::test]
async fn fixture_run_emits_expected_schedules() {
    let repository = RepositoryFactory::create_local();
    repository.store_roster(parse_roster_fixture()).await.unwrap();

    let duration = SlotDuration::from_minutes(90).unwrap();
    let schedules = collect_available_slots(repository.as_ref(), duration)
        .await
        .unwrap();

    // Otto's trailing gap and Jens's trailing gap qualify; Jens's short
    // morning window is skipped and Mila has no bookings to measure against.
    assert_eq!(schedules.len(), 2);

    assert_eq!(schedules[0].photographer.id.value(), "1");
    assert_eq!(schedules[0].time_slot.starts, ts("2026-09-14T10:30:00+01:00"));
    assert_eq!(schedules[0].time_slot.ends, ts("2026-09-14T12:00:00+01:00"));

    assert_eq!(schedules[1].photographer.id.value(), "2");
    assert_eq!(schedules[1].time_slot.starts, ts("2026-09-15T11:15:00+02:00"));
    assert_eq!(schedules[1].time_slot.ends, ts("2026-09-15T12:45:00+02:00"));

    // Results embed snapshots only.
    for schedule in &schedules {
        assert!(schedule.photographer.availabilities.is_empty());
        assert!(schedule.photographer.bookings.is_empty());
        assert_eq!(schedule.time_slot.duration_minutes(), 90);
    }

    // The run is also recorded in the repository, in the same order.
    let recorded = repository.list_schedules().await.unwrap();
    assert_eq!(recorded, schedules);
}

#[tokio::test]
async fn repeated_runs_over_same_roster_are_identical() {
    let duration = SlotDuration::from_minutes(90).unwrap();

    let first_repo = RepositoryFactory::create_local();
    first_repo.store_roster(parse_roster_fixture()).await.unwrap();
    let first = collect_available_slots(first_repo.as_ref(), duration)
        .await
        .unwrap();

    let second_repo = RepositoryFactory::create_local();
    second_repo.store_roster(parse_roster_fixture()).await.unwrap();
    let second = collect_available_slots(second_repo.as_ref(), duration)
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn serialized_output_keeps_wire_format() {
    let repository = RepositoryFactory::create_local();
    repository.store_roster(parse_roster_fixture()).await.unwrap();

    let schedules = collect_available_slots(
        repository.as_ref(),
        SlotDuration::from_minutes(90).unwrap(),
    )
    .await
    .unwrap();

    let json = serde_json::to_string_pretty(&schedules).unwrap();
    assert!(json.contains("\"timeSlot\""));
    assert!(json.contains("\"photographer\""));
    assert!(json.contains("2026-09-14T10:30:00+01:00"));
    assert!(json.contains("2026-09-15T12:45:00+02:00"));
}

#[tokio::test]
async fn larger_request_finds_no_room() {
    let repository = RepositoryFactory::create_local();
    repository.store_roster(parse_roster_fixture()).await.unwrap();

    // No gap in the fixture reaches four hours.
    let schedules = collect_available_slots(
        repository.as_ref(),
        SlotDuration::from_minutes(240).unwrap(),
    )
    .await
    .unwrap();

    assert!(schedules.is_empty());
}
