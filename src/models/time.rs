use serde::*;

/// Timestamp with the zone offset it was written with.
///
/// Comparisons and subtraction operate on the underlying instant, so mixing
/// offsets is safe.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;

/// Whole minutes from `starts` to `ends`, truncated toward zero.
///
/// Negative when `ends` precedes `starts`. A 90-second interval measures as
/// 1 minute; partial minutes never count toward a gap.
pub fn minutes_between(starts: Timestamp, ends: Timestamp) -> i64 {
    (ends - starts).num_minutes()
}

/// Requested slot length as a positive count of whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotDuration(i64);

impl SlotDuration {
    /// Create a slot duration, rejecting non-positive minute counts.
    pub fn from_minutes(minutes: i64) -> Option<Self> {
        if minutes > 0 {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Raw minute count.
    pub fn minutes(&self) -> i64 {
        self.0
    }

    /// Convert to a chrono duration for timestamp arithmetic.
    pub fn to_duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.0)
    }
}

impl std::fmt::Display for SlotDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}min", self.0)
    }
}
