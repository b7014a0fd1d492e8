//! Fairness policies for ranking candidates against history.

use crate::history::AssignmentEvent;
use crate::roster::{Doctor, DoctorId};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Strategy for deciding whose turn it is.
///
/// Both policies look only at events matching the draw's area and a
/// candidate's id, and both count rotations AND indications as a used
/// turn — a doctor indicated manually does not also keep their place in
/// the queue.
///
/// Both policies guarantee that a candidate with no matching event at
/// all is in the tie set: prior history can never outrank "never
/// selected".
///
/// # Examples
///
/// ```
/// use oncall_rotation::rotation::RotationPolicy;
///
/// // The default queue discipline.
/// let policy = RotationPolicy::default();
/// assert_eq!(policy, RotationPolicy::LeastRecentlySelected);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationPolicy {
    /// Rank by the timestamp of each candidate's most recent selection;
    /// oldest wins, never-selected ranks before every real timestamp.
    ///
    /// Behaves as a queue by recency: waiting longest means going next.
    ///
    /// # Complexity
    /// O(|candidates| + |history|)
    LeastRecentlySelected,

    /// Rank by each candidate's total number of selections; fewest wins.
    ///
    /// Balances lifetime load rather than recency: a doctor returning
    /// from a long absence keeps priority until their count catches up.
    ///
    /// # Complexity
    /// O(|candidates| + |history|)
    FewestTotalSelections,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        RotationPolicy::LeastRecentlySelected
    }
}

impl RotationPolicy {
    /// Computes the tie set: indices into `candidates` sharing the best
    /// fairness score for `area` under this policy.
    ///
    /// Returns all indices when history holds no matching events, and an
    /// empty vec only for an empty candidate slice.
    pub fn tie_set(
        &self,
        candidates: &[&Doctor],
        history: &[AssignmentEvent],
        area: &str,
    ) -> Vec<usize> {
        match self {
            RotationPolicy::LeastRecentlySelected => by_recency(candidates, history, area),
            RotationPolicy::FewestTotalSelections => by_count(candidates, history, area),
        }
    }
}

fn candidate_index<'a>(candidates: &[&'a Doctor]) -> HashMap<&'a DoctorId, usize> {
    candidates.iter().enumerate().map(|(i, d)| (&d.id, i)).collect()
}

/// Most recent matching selection per candidate; `None` = never selected.
/// `Option<DateTime>` ordering puts `None` before every `Some`, so the
/// minimum naturally favors never-selected candidates.
fn by_recency(candidates: &[&Doctor], history: &[AssignmentEvent], area: &str) -> Vec<usize> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let index = candidate_index(candidates);
    let mut last_selected: Vec<Option<DateTime<Utc>>> = vec![None; candidates.len()];

    // No ordering assumption on history: keep the max timestamp per
    // candidate.
    for event in history.iter().filter(|e| e.area == area) {
        if let Some(&i) = index.get(&event.selected_doctor_id) {
            if last_selected[i].is_none_or(|t| event.created_at > t) {
                last_selected[i] = Some(event.created_at);
            }
        }
    }

    let best = *last_selected.iter().min().expect("candidates is non-empty");
    last_selected
        .iter()
        .enumerate()
        .filter(|(_, t)| **t == best)
        .map(|(i, _)| i)
        .collect()
}

/// Total matching selections per candidate; fewest wins.
fn by_count(candidates: &[&Doctor], history: &[AssignmentEvent], area: &str) -> Vec<usize> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let index = candidate_index(candidates);
    let mut counts = vec![0usize; candidates.len()];

    for event in history.iter().filter(|e| e.area == area) {
        if let Some(&i) = index.get(&event.selected_doctor_id) {
            counts[i] += 1;
        }
    }

    let best = *counts.iter().min().expect("candidates is non-empty");
    counts
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == best)
        .map(|(i, _)| i)
        .collect()
}
