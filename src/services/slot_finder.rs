//! First-fit free-slot search over availability windows.
//!
//! For each availability window of each photographer, find the first gap of
//! at least the requested length that does not overlap any booking, and emit
//! a candidate slot of exactly that length. Bookings are assumed sorted
//! ascending by start and pairwise non-overlapping; each availability window
//! is examined independently against the full booking list.
//!
//! Two behaviors are deliberate and relied upon by callers:
//!
//! - A photographer with no bookings yields no candidates at all: the search
//!   only inspects gaps relative to bookings, never the bare window.
//! - The first qualifying gap in booking order wins; later or larger gaps
//!   are not considered, and the remainder of a gap longer than the request
//!   is discarded.

use log::debug;

use crate::api::{Photographer, Schedule, SlotDuration, TimeSlot};
use crate::db::repository::{RepositoryResult, RosterRepository};
use crate::models::minutes_between;

/// Find the first open slot of exactly `duration` inside one availability
/// window, given the photographer's chronologically sorted bookings.
///
/// Returns `None` when the window is shorter than the requested duration,
/// when no gap of sufficient length exists, or when the booking list is
/// empty.
pub fn first_open_slot(
    window: &TimeSlot,
    bookings: &[TimeSlot],
    duration: SlotDuration,
) -> Option<TimeSlot> {
    let requested = duration.minutes();

    // A window shorter than the request can never host it.
    if minutes_between(window.starts, window.ends) < requested {
        return None;
    }

    let mut prev_ends = None;
    for (i, booking) in bookings.iter().enumerate() {
        // Booking lies beyond the window: nothing intrudes, the window
        // itself opens at its start.
        if booking.starts > window.ends
            && minutes_between(window.starts, window.ends) >= requested
        {
            return Some(TimeSlot::with_duration(window.starts, duration));
        }

        if booking.starts < window.ends {
            if i == 0 {
                // Leading gap between the window start and the first booking.
                if minutes_between(window.starts, booking.starts) >= requested {
                    return Some(TimeSlot::with_duration(window.starts, duration));
                }
            } else if let Some(prev) = prev_ends {
                // Gap between the previous booking's end and this one's start.
                if minutes_between(prev, booking.starts) >= requested {
                    return Some(TimeSlot::with_duration(prev, duration));
                }
            }
        }

        // Trailing gap between the last booking and the window end.
        if i == bookings.len() - 1 && minutes_between(booking.ends, window.ends) >= requested {
            return Some(TimeSlot::with_duration(booking.ends, duration));
        }

        prev_ends = Some(booking.ends);
    }

    None
}

/// Compute candidate slots for every photographer in the roster.
///
/// Photographers are processed in order, their availability windows in
/// order, at most one candidate per window. Each result embeds a
/// photographer snapshot reduced to id + name. Pure and deterministic:
/// running it twice over the same input yields identical lists.
pub fn find_available_slots(
    photographers: &[Photographer],
    duration: SlotDuration,
) -> Vec<Schedule> {
    let mut schedules = Vec::new();
    for photographer in photographers {
        let snapshot = photographer.snapshot();
        for window in &photographer.availabilities {
            if let Some(slot) = first_open_slot(window, &photographer.bookings, duration) {
                schedules.push(Schedule {
                    photographer: snapshot.clone(),
                    time_slot: slot,
                });
            }
        }
    }
    schedules
}

/// Run the slot finder over the repository's roster and record the results.
///
/// Lists photographers from the repository, computes the candidates, appends
/// each schedule in order, and returns the computed list.
pub async fn collect_available_slots(
    repo: &dyn RosterRepository,
    duration: SlotDuration,
) -> RepositoryResult<Vec<Schedule>> {
    let photographers = repo.list_photographers().await?;
    let schedules = find_available_slots(&photographers, duration);
    debug!(
        "found {} candidate slots of {} across {} photographers",
        schedules.len(),
        duration,
        photographers.len()
    );

    for schedule in &schedules {
        repo.append_schedule(schedule.clone()).await?;
    }

    Ok(schedules)
}
