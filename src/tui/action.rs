//! Actions returned by screen event handlers.

use crate::form::{PhotoRequest, Ticket};

/// An action that the screen hands back to the [`App`](super::App).
///
/// The screen only mutates form state; anything that needs the runtime
/// (spawning a read, scheduling a timer, leaving the loop) is an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Read the requested photo in the background.
    LoadPhoto(PhotoRequest),
    /// Schedule the end of the submission identified by the ticket.
    StartSubmit(Ticket),
    /// Quit the application.
    Quit,
}
