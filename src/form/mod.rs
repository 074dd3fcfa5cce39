//! Headless form controller, photo preview loading and submission timing.
//!
//! Nothing here draws or reads input. A host (the TUI, or a test) feeds UI
//! events into [`ProfileForm`], runs the background work it asks for, and
//! reports completions back as [`FormEvent`]s.

mod controller;
mod event;
mod preview;
mod submission;

pub use controller::{
    FieldState, ModalTarget, ProfileForm, SUBMIT_LABEL, SUBMITTING_LABEL, SubmitOutcome,
};
pub use event::{FormEvent, Ticket};
pub use preview::{
    DataUrl, PhotoPreview, PhotoRequest, PreviewError, mime_for_path, read_data_url,
    spawn_photo_read,
};
pub use submission::{
    DEFAULT_SUBMIT_DELAY, DEFAULT_SUBMIT_DELAY_MS, SubmissionState, SubmitTimer,
};
