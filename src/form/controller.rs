//! The pet profile form controller.
//!
//! [`ProfileForm`] owns every piece of form state (field values, error
//! markers, the photo preview, the description counter, the submission
//! lifecycle and the confirmation modal) and exposes one method per UI event.
//! It never touches a terminal or a clock: asynchronous work is handed back to
//! the caller as a ticketed request, and the caller reports completion.

use std::path::PathBuf;

use chrono::Utc;

use super::event::Ticket;
use super::preview::{DataUrl, PhotoPreview, PhotoRequest, PreviewError};
use super::submission::SubmissionState;
use crate::model::{
    DEFAULT_DESCRIPTION_LIMIT, FieldDescriptor, FieldId, FieldKind, InputKind, PET_PROFILE_FIELDS,
    PetProfile, ValidationError, enforce_limit, format_phone, validate,
};

/// Submit control label while idle.
pub const SUBMIT_LABEL: &str = "Create Profile";
/// Submit control label while a submission is in flight.
pub const SUBMITTING_LABEL: &str = "Creating Profile...";

/// A field's definition together with its live value and error marker.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    descriptor: FieldDescriptor,
    value: String,
    error: Option<ValidationError>,
}

impl FieldState {
    fn new(descriptor: FieldDescriptor) -> Self {
        Self {
            descriptor,
            value: String::new(),
            error: None,
        }
    }

    /// Returns the field's static definition.
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    pub fn id(&self) -> FieldId {
        self.descriptor.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the error currently shown for this field, if any.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Returns `true` if the field is in the error visual state.
    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every field validated; the caller should wait out the submit delay and
    /// then call [`ProfileForm::submission_elapsed`] with `ticket`.
    Started { ticket: Ticket, profile: PetProfile },
    /// At least one field failed; `first_error` has been focused and marked
    /// for scrolling into view.
    Rejected { first_error: FieldId },
    /// A submission is already in flight or the confirmation is showing.
    Ignored,
}

/// Where a click on the open confirmation modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    /// The dimmed area around the dialog.
    Backdrop,
    /// The dialog itself.
    Content,
}

/// State and event handlers for the pet profile form.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    fields: Vec<FieldState>,
    focus: usize,
    preview: PhotoPreview,
    char_limit: usize,
    char_count: usize,
    submission: SubmissionState,
    modal_open: bool,
    scroll_target: Option<FieldId>,
    notice: Option<String>,
    photo_ticket: Option<Ticket>,
    next_ticket: u64,
    last_profile: Option<PetProfile>,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new(DEFAULT_DESCRIPTION_LIMIT)
    }
}

impl ProfileForm {
    /// Creates the pet profile form with the given description length limit.
    pub fn new(char_limit: usize) -> Self {
        Self::with_fields(PET_PROFILE_FIELDS, char_limit)
    }

    /// Creates a form over an explicit field set.
    pub fn with_fields(descriptors: &[FieldDescriptor], char_limit: usize) -> Self {
        Self {
            fields: descriptors.iter().copied().map(FieldState::new).collect(),
            focus: 0,
            preview: PhotoPreview::Empty,
            char_limit,
            char_count: 0,
            submission: SubmissionState::Idle,
            modal_open: false,
            scroll_target: None,
            notice: None,
            photo_ticket: None,
            next_ticket: 0,
            last_profile: None,
        }
    }

    // --- Fields and focus ---

    /// Returns all fields in display order.
    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    /// Returns the field with the given id, if it is part of this form.
    pub fn field(&self, id: FieldId) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Returns the value of a field, or an empty string if it is not part of this form.
    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).map(FieldState::value).unwrap_or("")
    }

    /// Returns the display index of a field.
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    /// Returns the index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the id of the focused field.
    pub fn focused_id(&self) -> Option<FieldId> {
        self.fields.get(self.focus).map(FieldState::id)
    }

    /// Moves focus to the given field. Unknown ids are ignored.
    pub fn set_focus(&mut self, id: FieldId) {
        if let Some(index) = self.position(id) {
            self.focus = index;
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Returns `true` if any field is in the error state.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(FieldState::is_invalid)
    }

    // --- Input events ---

    /// Handles a change to a field's value (one keystroke or paste).
    ///
    /// Phone fields are re-masked, the description is clamped to the character
    /// limit, and a required field that is already showing an error is
    /// re-validated so the message clears as soon as the input becomes valid.
    pub fn on_input(&mut self, id: FieldId, value: impl Into<String>) {
        let Some(index) = self.position(id) else {
            return;
        };
        let mut value = value.into();

        if self.fields[index].descriptor.kind == FieldKind::Tel {
            value = format_phone(&value);
        }
        if id == FieldId::Description {
            self.char_count = enforce_limit(&mut value, self.char_limit);
        }

        let field = &mut self.fields[index];
        field.value = value;
        if field.descriptor.required && field.is_invalid() {
            self.validate_at(index);
        }
    }

    /// Handles focus leaving a field: required fields are validated.
    pub fn on_blur(&mut self, id: FieldId) {
        if let Some(index) = self.position(id)
            && self.fields[index].descriptor.required
        {
            self.validate_at(index);
        }
    }

    /// Steps a select field to its next (or previous) option, wrapping around.
    ///
    /// An unselected field moves to the first option going forward and to the
    /// last going backward. Non-select fields are ignored.
    pub fn select_option(&mut self, id: FieldId, forward: bool) {
        let Some(field) = self.field(id) else {
            return;
        };
        let InputKind::Select(options) = field.descriptor.input else {
            return;
        };
        if options.is_empty() {
            return;
        }

        let len = options.len();
        let current = options.iter().position(|o| *o == field.value);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.on_input(id, options[next]);
    }

    /// Validates one field, updating its error marker. Returns `true` if valid.
    pub fn validate_field(&mut self, id: FieldId) -> bool {
        self.position(id).is_none_or(|index| self.validate_at(index))
    }

    // --- Photo preview ---

    /// Handles a file selection.
    ///
    /// Returns a request for the caller to read the file, or `None` when the
    /// selection was cleared. Selecting again supersedes any read in flight.
    pub fn on_photo_selected(&mut self, path: Option<PathBuf>) -> Option<PhotoRequest> {
        let path = path?;
        let ticket = self.issue_ticket();
        self.photo_ticket = Some(ticket);
        tracing::debug!(%ticket, path = %path.display(), "photo selected");
        Some(PhotoRequest { ticket, path })
    }

    /// Applies a finished photo read. Returns `true` if the preview was populated.
    ///
    /// A failed read leaves the current preview in place and sets a notice.
    /// Results for superseded requests, or requests made before the form was
    /// reset, are discarded.
    pub fn on_photo_loaded(
        &mut self,
        ticket: Ticket,
        path: PathBuf,
        result: Result<DataUrl, PreviewError>,
    ) -> bool {
        if self.photo_ticket != Some(ticket) {
            tracing::debug!(%ticket, "discarding stale photo result");
            return false;
        }
        self.photo_ticket = None;

        match result {
            Ok(data_url) => {
                tracing::debug!(mime = data_url.mime(), bytes = data_url.payload_len(), "photo loaded");
                self.preview = PhotoPreview::Populated { path, data_url };
                self.notice = None;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "photo preview failed");
                self.notice = Some(e.to_string());
                false
            }
        }
    }

    /// Returns the current photo preview.
    pub fn preview(&self) -> &PhotoPreview {
        &self.preview
    }

    // --- Character counter ---

    /// Returns the displayed description length.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Returns the description length limit.
    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    // --- Submission ---

    /// Validates every field and, if all pass, starts a submission.
    ///
    /// All fields are validated (not just required ones) so every problem is
    /// shown at once. On failure the first invalid field is focused and queued
    /// for [`take_scroll_target`](Self::take_scroll_target).
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submission.is_submitting() || self.modal_open {
            tracing::debug!("submit ignored while busy");
            return SubmitOutcome::Ignored;
        }

        let mut valid = true;
        for index in 0..self.fields.len() {
            valid &= self.validate_at(index);
        }

        if !valid {
            let Some(index) = self.fields.iter().position(FieldState::is_invalid) else {
                return SubmitOutcome::Ignored;
            };
            let first_error = self.fields[index].id();
            self.focus = index;
            self.scroll_target = Some(first_error);
            tracing::debug!(field = %first_error, "submit rejected");
            return SubmitOutcome::Rejected { first_error };
        }

        let ticket = self.issue_ticket();
        self.submission = SubmissionState::Submitting { ticket };
        let photo = match &self.preview {
            PhotoPreview::Populated { path, .. } => Some(path.clone()),
            PhotoPreview::Empty => None,
        };
        let profile = PetProfile::collect(
            self.fields.iter().map(|f| (f.id(), f.value.as_str())),
            Utc::now(),
        )
        .with_photo(photo);
        self.last_profile = Some(profile.clone());
        tracing::info!(%ticket, pet = %profile.pet_name, "submission started");
        SubmitOutcome::Started { ticket, profile }
    }

    /// Finishes the submission identified by `ticket` and opens the confirmation.
    ///
    /// Returns `false` (and changes nothing) if `ticket` is not the submission
    /// in flight.
    pub fn submission_elapsed(&mut self, ticket: Ticket) -> bool {
        if self.submission != (SubmissionState::Submitting { ticket }) {
            tracing::debug!(%ticket, "discarding stale submission timer");
            return false;
        }
        self.submission = SubmissionState::Idle;
        self.modal_open = true;
        tracing::info!(%ticket, "submission complete");
        true
    }

    /// Returns the submission lifecycle state.
    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// Returns `true` if the submit control accepts presses.
    pub fn is_submit_enabled(&self) -> bool {
        !self.submission.is_submitting()
    }

    /// Returns the submit control's current label.
    pub fn submit_label(&self) -> &'static str {
        if self.submission.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Returns the profile from the most recent successful submit, until reset.
    pub fn last_profile(&self) -> Option<&PetProfile> {
        self.last_profile.as_ref()
    }

    /// Returns and clears the field that should be scrolled into view.
    pub fn take_scroll_target(&mut self) -> Option<FieldId> {
        self.scroll_target.take()
    }

    /// Returns the last non-validation notice (e.g. a failed photo read).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    // --- Modal ---

    /// Returns `true` if the confirmation modal is visible.
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Hides the confirmation modal and resets the form.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.reset();
    }

    /// Handles a click while the modal is open: only the backdrop closes it.
    pub fn click_modal(&mut self, target: ModalTarget) {
        if self.modal_open && target == ModalTarget::Backdrop {
            self.close_modal();
        }
    }

    /// Clears every field, error, the preview and the counter.
    ///
    /// Any photo read or submission still in flight is orphaned: its
    /// completion will no longer match and is discarded.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.focus = 0;
        self.preview = PhotoPreview::Empty;
        self.char_count = 0;
        self.submission = SubmissionState::Idle;
        self.scroll_target = None;
        self.notice = None;
        self.photo_ticket = None;
        self.last_profile = None;
        tracing::debug!("form reset");
    }

    // --- Internals ---

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    fn validate_at(&mut self, index: usize) -> bool {
        let field = &mut self.fields[index];
        match validate(&field.descriptor, &field.value) {
            Ok(()) => {
                field.error = None;
                true
            }
            Err(e) => {
                tracing::debug!(field = %field.descriptor.id, error = %e, "field invalid");
                field.error = Some(e);
                false
            }
        }
    }
}
