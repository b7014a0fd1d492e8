//! Append-only assignment history.
//!
//! Every completed rotation or indication becomes one immutable
//! [`AssignmentEvent`]. The rotation selector only ever reads `area`,
//! `kind`, `selected_doctor_id`, and `created_at` from past events;
//! nothing in the core edits or reinterprets a record after it is written.
//!
//! Persistence goes through the [`Recorder`] seam: the caller confirms a
//! decision, builds an [`AssignmentDraft`], and appends it. The recorder
//! assigns `id` and `created_at`, so drafts carry neither.

mod export;
mod recorder;
mod types;

pub use export::export_csv;
pub use recorder::{InMemoryRecorder, RecordError, Recorder};
pub use types::{most_recent, AssignmentDraft, AssignmentEvent, EventKind, Initiator};
