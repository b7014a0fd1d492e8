//! Fairness-ordered winner selection.
//!
//! The selector ranks an eligibility pool against the assignment history
//! for one area and draws the winner from the tie set of best-ranked
//! candidates:
//!
//! - **Policy**: a [`RotationPolicy`] scores fairness — least recently
//!   selected, or fewest total selections. Exactly one policy applies
//!   per draw; the two are never mixed.
//! - **Tie-break**: uniform random over the tie set, the only
//!   nondeterministic step in the core. The RNG is injected so tests
//!   can seed it.
//! - **Indication**: [`indicate`] bypasses the fairness ranking and
//!   only validates pool membership.
//!
//! The selector never writes history; persistence is the caller's
//! responsibility through the [`Recorder`](crate::history::Recorder)
//! seam, after user confirmation.

mod policy;
mod selector;
mod types;

pub use policy::RotationPolicy;
pub use selector::{indicate, RotationSelector};
pub use types::{SelectionError, SelectionResult};
