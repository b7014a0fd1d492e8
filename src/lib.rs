//! Deterministic decision core for a hospital on-call rotation.
//!
//! Given a roster snapshot, an eligibility query, and an ordered assignment
//! history, this crate computes who is next on call for a clinical area:
//!
//! - **Eligibility**: pure candidate filtering over the roster — area
//!   membership, active flag, self-exclusion, payer-plan gate.
//! - **Rotation**: fairness-ordered winner selection among the candidates
//!   with pluggable fairness policies and a uniform random tie-break
//!   behind an injectable RNG.
//! - **Indication**: manual selection of a specific candidate, validated
//!   against the same eligibility pool.
//! - **History**: the append-only assignment record the selector reads,
//!   the `Recorder` seam it is persisted through, and CSV export.
//!
//! # Architecture
//!
//! The core is a pure, synchronous computation. It consumes read-only
//! snapshots (roster, history) supplied by the caller at call time and
//! never initiates I/O, never logs, and never holds shared mutable state.
//! Authentication, data synchronization, routing, and rendering are
//! external collaborators; they reach the core only through the plain
//! value types in [`roster`], [`history`], and [`session`].
//!
//! Both snapshots must be consistent as of a single observation point,
//! and a decision is valid only relative to that snapshot. If two
//! initiators race to draw for the same area, the core cannot detect it;
//! the surrounding system should serialize decide-then-persist per area.

pub mod eligibility;
pub mod history;
pub mod roster;
pub mod rotation;
pub mod session;
