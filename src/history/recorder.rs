//! The persistence seam for assignment events.

use super::types::{AssignmentDraft, AssignmentEvent};
use chrono::Utc;
use thiserror::Error;

/// Failure to durably append an assignment event.
///
/// A failed append does NOT finalize the decision: the caller retries the
/// append with the same draft. Re-running the draw on a transient write
/// failure would bias the fairness of the tie-break.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("failed to persist assignment event: {reason}")]
    PersistenceFailure { reason: String },
}

/// Durably appends finalized assignment events.
///
/// The recorder assigns `id` and `created_at`; `created_at` must be
/// monotonically non-decreasing across appends so that events stay
/// totally ordered by recency. The core invokes a recorder only after
/// explicit confirmation from the initiating user, never automatically.
///
/// Decide-then-persist is not atomic here. Callers that allow concurrent
/// draws for the same area must serialize the pair themselves, or accept
/// a low-probability double assignment as a stated operational limit.
pub trait Recorder {
    /// Appends the draft and returns the stored event.
    fn append(&mut self, draft: AssignmentDraft) -> Result<AssignmentEvent, RecordError>;
}

/// In-memory recorder and history source.
///
/// Reference implementation for tests and demos; production deployments
/// implement [`Recorder`] against their hosted backend.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecorder {
    events: Vec<AssignmentEvent>,
    next_seq: u64,
}

impl InMemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored events, oldest first.
    pub fn events(&self) -> &[AssignmentEvent] {
        &self.events
    }

    /// Stored events for one area, oldest first.
    pub fn events_for_area(&self, area: &str) -> Vec<&AssignmentEvent> {
        self.events.iter().filter(|e| e.area == area).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Administrative bulk deletion of the whole history.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Recorder for InMemoryRecorder {
    fn append(&mut self, draft: AssignmentDraft) -> Result<AssignmentEvent, RecordError> {
        let now = Utc::now();
        // Clamp so created_at never goes backwards against the last event.
        let created_at = match self.events.last() {
            Some(last) if last.created_at > now => last.created_at,
            _ => now,
        };

        self.next_seq += 1;
        let event = AssignmentEvent {
            id: format!("ev-{}", self.next_seq),
            kind: draft.kind,
            area: draft.area,
            initiator: draft.initiator,
            selected_doctor_id: draft.selected_doctor_id,
            selected_doctor_name: draft.selected_doctor_name,
            eligible_ids: draft.eligible_ids,
            created_at,
        };
        self.events.push(event.clone());
        Ok(event)
    }
}
