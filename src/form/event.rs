//! Completions delivered back to the form from background tasks.

use std::fmt;
use std::path::PathBuf;

use super::preview::{DataUrl, PreviewError};

/// Identifies one asynchronous request issued by a [`ProfileForm`](super::ProfileForm).
///
/// A completion is only applied if its ticket still matches the request the
/// form is waiting for; anything else is stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub(crate) u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finished background task, sent to the UI loop over a channel.
#[derive(Debug)]
pub enum FormEvent {
    /// The simulated submission delay elapsed.
    SubmitElapsed(Ticket),
    /// A photo read finished, successfully or not.
    PhotoLoaded {
        ticket: Ticket,
        path: PathBuf,
        result: Result<DataUrl, PreviewError>,
    },
}
