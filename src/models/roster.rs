// ============================================================================
// Roster JSON Parsing and Rendering
// ============================================================================
//
// File-shaped plumbing around the core model: deserialize a roster JSON
// string into the in-memory model, and render photographers/schedules as
// indented text for debug inspection.

use std::fmt::Write as _;

use anyhow::{Context, Result};

use crate::api::{Photographer, Roster, Schedule};
use crate::db::checksum::calculate_checksum;

fn validate_input_roster(roster_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(roster_json).context("Invalid roster JSON")?;
    let has_photographers = value
        .as_object()
        .and_then(|obj| obj.get("photographers"))
        .is_some();
    if !has_photographers {
        anyhow::bail!("Missing required 'photographers' field");
    }
    Ok(())
}

/// Parse a roster from a JSON string.
///
/// Deserializes the roster using Serde after a cheap structural check for
/// the `photographers` key. The checksum of the source text is computed and
/// stored on the roster when the input does not carry one.
///
/// # Arguments
///
/// * `roster_json` - Roster JSON (photographers with availabilities and bookings)
///
/// # Returns
///
/// A fully populated `Roster` with a computed checksum.
pub fn parse_roster_json_str(roster_json: &str) -> Result<Roster> {
    validate_input_roster(roster_json)?;

    let mut roster: Roster = serde_json::from_str(roster_json)
        .context("Failed to deserialize roster JSON using Serde")?;

    // Compute checksum if not provided
    if roster.checksum.is_empty() {
        roster.checksum = calculate_checksum(roster_json);
    }

    Ok(roster)
}

/// Render photographers as an indented listing for debug output.
pub fn render_roster(photographers: &[Photographer]) -> String {
    let mut out = String::from("Photographers:\n");
    for photographer in photographers {
        let _ = writeln!(out, "\tid  : {}", photographer.id);
        let _ = writeln!(out, "\tname: {}", photographer.name);

        let _ = writeln!(out, "\tavailabilities");
        for availability in &photographer.availabilities {
            let _ = writeln!(out, "\t\tstarts: {}", availability.starts.to_rfc3339());
            let _ = writeln!(out, "\t\tends  : {}", availability.ends.to_rfc3339());
        }

        let _ = writeln!(out, "\tbookings");
        for booking in &photographer.bookings {
            let _ = writeln!(out, "\t\tstarts: {}", booking.starts.to_rfc3339());
            let _ = writeln!(out, "\t\tends  : {}", booking.ends.to_rfc3339());
        }
    }
    out
}

/// Render computed schedules as an indented listing for debug output.
pub fn render_schedules(schedules: &[Schedule]) -> String {
    let mut out = String::from("Schedule:\n");
    for schedule in schedules {
        let _ = writeln!(out, "Photographer");
        let _ = writeln!(out, "\tid  : {}", schedule.photographer.id);
        let _ = writeln!(out, "\tname: {}", schedule.photographer.name);
        let _ = writeln!(out, "Time Slot");
        let _ = writeln!(out, "\tstarts: {}", schedule.time_slot.starts.to_rfc3339());
        let _ = writeln!(out, "\tends  : {}", schedule.time_slot.ends.to_rfc3339());
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
