//! Roster snapshot types.
//!
//! The roster is owned by an external management collaborator; the core
//! reads a snapshot of it at decision time and never mutates it.

mod types;

pub use types::{Doctor, DoctorId};
