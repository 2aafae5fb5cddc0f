//! Core data model shared across the crate.
//!
//! These are the records exchanged between the loader, the repository and
//! the slot finder. All types derive Serialize/Deserialize and keep the
//! JSON field names of the external roster format.

use serde::{Deserialize, Serialize};

pub use crate::models::{SlotDuration, Timestamp};

/// Photographer identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PhotographerId(pub String);

impl PhotographerId {
    pub fn new(value: impl Into<String>) -> Self {
        PhotographerId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhotographerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PhotographerId {
    fn from(value: &str) -> Self {
        PhotographerId::new(value)
    }
}

/// Time interval, half-open by convention: `[starts, ends)`.
///
/// Timestamps carry the zone offset they were written with, so a parsed
/// roster serializes back with the original offsets intact. `ends` is
/// expected to lie strictly after `starts`; the slot finder assumes this
/// but does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Optional identifier tagging the interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Start instant (inclusive).
    pub starts: Timestamp,
    /// End instant (exclusive).
    pub ends: Timestamp,
}

impl TimeSlot {
    /// Create a time slot, rejecting intervals that do not move forward.
    pub fn new(starts: Timestamp, ends: Timestamp) -> Option<Self> {
        if starts < ends {
            Some(Self {
                id: None,
                starts,
                ends,
            })
        } else {
            None
        }
    }

    /// Create a slot of exactly `duration` starting at `starts`.
    pub fn with_duration(starts: Timestamp, duration: SlotDuration) -> Self {
        Self {
            id: None,
            starts,
            ends: starts + duration.to_duration(),
        }
    }

    /// Length of the interval in whole minutes, truncated toward zero.
    pub fn duration_minutes(&self) -> i64 {
        crate::models::minutes_between(self.starts, self.ends)
    }

    /// Check if this interval overlaps with another.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.starts < other.ends && other.starts < self.ends
    }
}

/// A photographer with availability windows and confirmed bookings.
///
/// Bookings are expected sorted ascending by start and pairwise
/// non-overlapping; availability windows are processed independently and
/// carry no ordering assumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photographer {
    pub id: PhotographerId,
    pub name: String,
    /// Windows during which the photographer is generally willing to work.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availabilities: Vec<TimeSlot>,
    /// Confirmed bookings, unavailable for new work.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bookings: Vec<TimeSlot>,
}

impl Photographer {
    pub fn new(id: PhotographerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            availabilities: Vec::new(),
            bookings: Vec::new(),
        }
    }

    /// Copy reduced to id + name, as embedded in results.
    pub fn snapshot(&self) -> Photographer {
        Photographer {
            id: self.id.clone(),
            name: self.name.clone(),
            availabilities: Vec::new(),
            bookings: Vec::new(),
        }
    }
}

/// One offerable result: a photographer snapshot paired with a candidate
/// free slot of exactly the requested duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub photographer: Photographer,
    #[serde(rename = "timeSlot")]
    pub time_slot: TimeSlot,
}

/// Parsed roster input: the full photographer list plus a checksum of the
/// source JSON. Accumulated schedule results live in the repository, not
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub photographers: Vec<Photographer>,
    /// SHA-256 checksum of the roster JSON, filled in at parse time when
    /// the input does not carry one.
    #[serde(default)]
    pub checksum: String,
}
