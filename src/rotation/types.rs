//! Selection outcomes and failures.

use crate::history::{AssignmentDraft, EventKind, Initiator};
use crate::roster::DoctorId;
use thiserror::Error;

/// Outcome of a rotation draw or a validated indication.
///
/// `candidate_pool` is the eligibility snapshot the decision was made
/// against; it is recorded on the event for auditability.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SelectionResult {
    pub winner_id: DoctorId,
    pub winner_name: String,
    pub candidate_pool: Vec<DoctorId>,
}

impl SelectionResult {
    /// Builds the draft the caller hands to the recorder once the user
    /// confirms.
    ///
    /// Keep the result around until the append succeeds: on a transient
    /// persistence failure the same draft is retried, never a fresh
    /// draw.
    pub fn into_draft(
        self,
        kind: EventKind,
        area: impl Into<String>,
        initiator: Initiator,
    ) -> AssignmentDraft {
        AssignmentDraft {
            kind,
            area: area.into(),
            initiator,
            selected_doctor_id: self.winner_id,
            selected_doctor_name: self.winner_name,
            eligible_ids: self.candidate_pool,
        }
    }
}

/// Why a selection could not be made.
///
/// Both variants are recoverable at the UI boundary; neither is fatal
/// and nothing is partially written.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The eligibility filter returned an empty pool. The user must
    /// change filters or area; there is nothing to retry.
    #[error("no eligible candidates")]
    NoEligibleCandidates,

    /// An indication named a doctor outside the eligible pool.
    #[error("doctor {0} is not in the eligible pool")]
    InvalidSelection(DoctorId),
}
