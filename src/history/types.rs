//! Assignment event records.

use crate::roster::DoctorId;
use chrono::{DateTime, Utc};
use std::fmt;

/// How an assignment was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// Automatic, fairness-ordered selection among eligible doctors.
    #[cfg_attr(feature = "serde", serde(rename = "DRAW"))]
    Rotation,

    /// Manual selection of a specific doctor by an authorized initiator.
    #[cfg_attr(feature = "serde", serde(rename = "INDICATION"))]
    Indication,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Rotation => f.write_str("Rotation"),
            EventKind::Indication => f.write_str("Indication"),
        }
    }
}

/// Who triggered an assignment.
///
/// Self-service draws are initiated by a doctor (and exclude that doctor
/// from the pool, see [`SessionContext`](crate::session::SessionContext));
/// front-desk operation is initiated by an administrative actor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "role", rename_all = "camelCase"))]
pub enum Initiator {
    Doctor { id: DoctorId, name: String },
    Admin,
}

impl Initiator {
    /// Display name recorded on the event.
    pub fn name(&self) -> &str {
        match self {
            Initiator::Doctor { name, .. } => name,
            Initiator::Admin => "Admin",
        }
    }
}

/// One historical record of a completed rotation or indication.
///
/// Immutable once created. Events are totally ordered by `created_at`;
/// same-instant ties are broken arbitrarily, which is acceptable because
/// only relative recency ever matters to the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssignmentEvent {
    pub id: String,
    pub kind: EventKind,

    /// Area label this assignment was for.
    pub area: String,

    pub initiator: Initiator,

    /// The chosen doctor. The id is authoritative; the name is a
    /// display cache denormalized at write time.
    pub selected_doctor_id: DoctorId,
    pub selected_doctor_name: String,

    /// Candidate pool snapshot at decision time, kept for auditability.
    pub eligible_ids: Vec<DoctorId>,

    pub created_at: DateTime<Utc>,
}

/// An assignment awaiting persistence: an event minus `id` and
/// `created_at`, both of which the [`Recorder`](super::Recorder) assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssignmentDraft {
    pub kind: EventKind,
    pub area: String,
    pub initiator: Initiator,
    pub selected_doctor_id: DoctorId,
    pub selected_doctor_name: String,
    pub eligible_ids: Vec<DoctorId>,
}

/// Returns references to the `limit` newest events, newest first.
///
/// Models a capped history fetch from the external source. A cap is safe
/// for the least-recently-selected policy only when `limit` is large
/// enough that every candidate's most-recent-or-absent status is still
/// correctly determined — roughly the number of areas times the rotation
/// cycle length. Below that, long-idle candidates are silently treated
/// as never selected.
pub fn most_recent(events: &[AssignmentEvent], limit: usize) -> Vec<&AssignmentEvent> {
    let mut sorted: Vec<&AssignmentEvent> = events.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(id: &str, secs: i64) -> AssignmentEvent {
        AssignmentEvent {
            id: id.to_owned(),
            kind: EventKind::Rotation,
            area: "Trauma".to_owned(),
            initiator: Initiator::Admin,
            selected_doctor_id: DoctorId::new("d1"),
            selected_doctor_name: "Dr. Ana".to_owned(),
            eligible_ids: vec![DoctorId::new("d1")],
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_most_recent_orders_newest_first() {
        let events = vec![event("a", 100), event("b", 300), event("c", 200)];
        let recent = most_recent(&events, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "b");
        assert_eq!(recent[1].id, "c");
    }

    #[test]
    fn test_most_recent_limit_exceeds_len() {
        let events = vec![event("a", 100)];
        assert_eq!(most_recent(&events, 10).len(), 1);
    }

    #[test]
    fn test_initiator_names() {
        let admin = Initiator::Admin;
        assert_eq!(admin.name(), "Admin");

        let doc = Initiator::Doctor {
            id: DoctorId::new("d2"),
            name: "Dr. Bruno".to_owned(),
        };
        assert_eq!(doc.name(), "Dr. Bruno");
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::Rotation.to_string(), "Rotation");
        assert_eq!(EventKind::Indication.to_string(), "Indication");
    }
}
