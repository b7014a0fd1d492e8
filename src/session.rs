//! Who is operating the system, as plain data.
//!
//! The original front-desk tool kept the logged-in identity in global
//! session state. Here it is an explicit value the caller constructs and
//! passes in: the core derives the self-exclusion and the recorded
//! initiator from it and never consults ambient "current user" state.

use crate::history::Initiator;
use crate::roster::DoctorId;

/// The acting identity behind a draw or indication.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "camelCase"))]
pub enum SessionContext {
    /// Front-desk / administrative operation. May draw or indicate for
    /// any area; no self-exclusion applies.
    Admin,

    /// A doctor operating self-service. Excluded from their own draws.
    Doctor { id: DoctorId, name: String },
}

impl SessionContext {
    pub fn doctor(id: impl Into<DoctorId>, name: impl Into<String>) -> Self {
        SessionContext::Doctor {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The doctor to exclude from the eligibility pool, if any.
    pub fn excluded_doctor(&self) -> Option<&DoctorId> {
        match self {
            SessionContext::Admin => None,
            SessionContext::Doctor { id, .. } => Some(id),
        }
    }

    /// The initiator recorded on the resulting assignment event.
    pub fn initiator(&self) -> Initiator {
        match self {
            SessionContext::Admin => Initiator::Admin,
            SessionContext::Doctor { id, name } => Initiator::Doctor {
                id: id.clone(),
                name: name.clone(),
            },
        }
    }
}
