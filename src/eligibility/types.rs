//! Eligibility query parameters.

use crate::roster::DoctorId;

/// Transient input to the eligibility filter.
///
/// # Examples
///
/// ```
/// use oncall_rotation::eligibility::EligibilityQuery;
/// use oncall_rotation::roster::DoctorId;
///
/// // Self-service draw: the initiating doctor cannot draw themselves,
/// // and the patient is under the restricted insurance plan.
/// let query = EligibilityQuery::new("Trauma")
///     .excluding(DoctorId::new("d7"))
///     .with_restricted_plan_patient(true);
///
/// assert_eq!(query.area, "Trauma");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EligibilityQuery {
    /// Area the assignment is for.
    pub area: String,

    /// Doctor to exclude from the pool, if any. Set when the initiator
    /// is a doctor drawing for themselves.
    pub excluded_doctor: Option<DoctorId>,

    /// When true, only doctors accepting the restricted plan qualify.
    pub restricted_plan_patient: bool,
}

impl EligibilityQuery {
    pub fn new(area: impl Into<String>) -> Self {
        EligibilityQuery {
            area: area.into(),
            excluded_doctor: None,
            restricted_plan_patient: false,
        }
    }

    pub fn excluding(mut self, doctor: DoctorId) -> Self {
        self.excluded_doctor = Some(doctor);
        self
    }

    pub fn with_restricted_plan_patient(mut self, restricted: bool) -> Self {
        self.restricted_plan_patient = restricted;
        self
    }
}
