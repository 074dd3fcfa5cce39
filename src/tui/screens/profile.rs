//! Pet profile screen — the form, photo preview, submit control and success dialog.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};

use crate::form::{FormEvent, ProfileForm, SubmitOutcome};
use crate::model::{FieldKind, InputKind, delete_last_digit};
use crate::tui::action::Action;
use crate::tui::widgets::{
    FormScroll, StatusBarContext, draw_form, draw_modal, draw_photo_preview, draw_status_bar,
    hit_test,
};

/// State for the pet profile screen.
#[derive(Debug, Clone)]
pub struct ProfileScreen {
    form: ProfileForm,
    scroll: FormScroll,
    tick: usize,
    last_area: Rect,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new(ProfileForm::default())
    }
}

impl ProfileScreen {
    /// Creates a screen around the given form.
    pub fn new(form: ProfileForm) -> Self {
        Self {
            form,
            scroll: FormScroll::default(),
            tick: 0,
            last_area: Rect::default(),
        }
    }

    /// Returns a reference to the form.
    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    /// Returns the scroll state of the field list.
    pub fn scroll(&self) -> &FormScroll {
        &self.scroll
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                KeyCode::Char('s') if !self.form.is_modal_open() => self.submit(),
                _ => Action::None,
            };
        }

        if self.form.is_modal_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.form.close_modal();
                self.scroll = FormScroll::default();
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.blur_focused();
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.blur_focused();
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Left => self.cycle_select(false),
            KeyCode::Right => self.cycle_select(true),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => {
                if self.focused_input() == Some(InputKind::File) {
                    self.select_photo()
                } else {
                    self.submit()
                }
            }
            KeyCode::Char(ch) => self.insert_char(ch),
            _ => Action::None,
        }
    }

    /// Handles a mouse event. Only clicks on the open success dialog matter.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.form.is_modal_open() && mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let target = hit_test(self.last_area, mouse.column, mouse.row);
            self.form.click_modal(target);
            if !self.form.is_modal_open() {
                self.scroll = FormScroll::default();
            }
        }
        Action::None
    }

    /// Applies a completed background task to the form.
    pub fn apply_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::SubmitElapsed(ticket) => {
                self.form.submission_elapsed(ticket);
            }
            FormEvent::PhotoLoaded {
                ticket,
                path,
                result,
            } => {
                self.form.on_photo_loaded(ticket, path, result);
            }
        }
    }

    /// Advances the loading spinner while a submission is in flight.
    pub fn tick(&mut self) {
        if self.form.submission().is_submitting() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    /// Records the full screen area, used to hit-test dialog clicks.
    pub fn set_area(&mut self, area: Rect) {
        self.last_area = area;
    }

    fn focused_input(&self) -> Option<InputKind> {
        let id = self.form.focused_id()?;
        self.form.field(id).map(|f| f.descriptor().input)
    }

    fn blur_focused(&mut self) {
        if let Some(id) = self.form.focused_id() {
            self.form.on_blur(id);
        }
    }

    fn insert_char(&mut self, ch: char) -> Action {
        let Some(id) = self.form.focused_id() else {
            return Action::None;
        };
        if matches!(self.focused_input(), Some(InputKind::Select(_))) {
            return Action::None;
        }
        let mut value = self.form.value(id).to_string();
        value.push(ch);
        self.form.on_input(id, value);
        Action::None
    }

    /// Deletes the last character of the focused field.
    ///
    /// Phone fields drop their last digit instead, and select fields are
    /// cleared back to "nothing selected".
    fn delete_char(&mut self) -> Action {
        let Some(field) = self.form.focused_id().and_then(|id| self.form.field(id)) else {
            return Action::None;
        };
        let id = field.id();
        let value = match (field.descriptor().kind, field.descriptor().input) {
            (_, InputKind::Select(_)) => String::new(),
            (FieldKind::Tel, _) => delete_last_digit(field.value()),
            _ => {
                let mut value = field.value().to_string();
                value.pop();
                value
            }
        };
        self.form.on_input(id, value);
        Action::None
    }

    fn cycle_select(&mut self, forward: bool) -> Action {
        if let Some(id) = self.form.focused_id() {
            self.form.select_option(id, forward);
        }
        Action::None
    }

    fn select_photo(&mut self) -> Action {
        let Some(id) = self.form.focused_id() else {
            return Action::None;
        };
        let path = self.form.value(id).trim();
        let path = (!path.is_empty()).then(|| PathBuf::from(path));
        match self.form.on_photo_selected(path) {
            Some(request) => Action::LoadPhoto(request),
            None => Action::None,
        }
    }

    fn submit(&mut self) -> Action {
        match self.form.submit() {
            SubmitOutcome::Started { ticket, profile } => {
                match serde_json::to_string(&profile) {
                    Ok(json) => tracing::info!(%ticket, profile = %json, "submitting pet profile"),
                    Err(e) => tracing::warn!(error = %e, "could not serialize profile"),
                }
                Action::StartSubmit(ticket)
            }
            SubmitOutcome::Rejected { .. } => {
                if let Some(index) = self
                    .form
                    .take_scroll_target()
                    .and_then(|id| self.form.position(id))
                {
                    self.scroll.request_center(index);
                }
                Action::None
            }
            SubmitOutcome::Ignored => Action::None,
        }
    }
}

/// Renders the profile screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_profile(state: &mut ProfileScreen, frame: &mut Frame, area: Rect) {
    state.set_area(area);

    let block = Block::default()
        .title(" Create Pet Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    let [form_area, photo_area] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .areas(body_area);

    draw_form(&state.form, &mut state.scroll, frame, form_area);
    draw_photo_preview(state.form.preview(), frame, photo_area);

    let ctx = StatusBarContext {
        submit_label: state.form.submit_label().to_string(),
        submit_enabled: state.form.is_submit_enabled(),
        tick: state.tick,
        notice: state.form.notice().map(str::to_string),
    };
    draw_status_bar(&ctx, frame, status_area);

    if state.form.is_modal_open() {
        draw_modal(state.form.last_profile(), frame, area);
    }
}
