//! The eligibility filter.

use super::types::EligibilityQuery;
use crate::roster::Doctor;

/// Computes the candidate pool for a rotation or indication.
///
/// A doctor is included iff all of the following hold:
///
/// 1. The doctor is active.
/// 2. The query's area is one of the doctor's areas.
/// 3. The doctor is not the query's excluded doctor (self-exclusion
///    for self-service draws).
/// 4. The patient is not under the restricted plan, or the doctor
///    accepts it.
///
/// Roster order is preserved. An empty result means no doctor qualifies;
/// the caller surfaces that as a user-facing condition.
pub fn eligible_doctors<'a>(roster: &'a [Doctor], query: &EligibilityQuery) -> Vec<&'a Doctor> {
    roster
        .iter()
        .filter(|d| d.active)
        .filter(|d| d.serves_area(&query.area))
        .filter(|d| query.excluded_doctor.as_ref() != Some(&d.id))
        .filter(|d| !query.restricted_plan_patient || d.accepts_restricted_plan)
        .collect()
}
