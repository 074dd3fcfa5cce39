use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::Terminal;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::form::{FormEvent, ProfileForm, SubmitTimer, spawn_photo_read};

use super::action::Action;
use super::error::AppError;
use super::screens::{ProfileScreen, draw_profile};

/// How long the loop waits for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Top-level application state.
///
/// Background work (photo reads, the submission delay) runs on the tokio
/// runtime and reports back over a channel that the event loop drains before
/// each redraw, so the form is only ever touched from the loop.
pub struct App {
    screen: ProfileScreen,
    submit_delay: Duration,
    events_tx: UnboundedSender<FormEvent>,
    events_rx: UnboundedReceiver<FormEvent>,
    submit_timer: Option<SubmitTimer>,
    photo_task: Option<JoinHandle<()>>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` with an empty form.
    pub fn new(config: &Config) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            screen: ProfileScreen::new(ProfileForm::new(config.description_limit)),
            submit_delay: config.submit_delay(),
            events_tx,
            events_rx,
            submit_timer: None,
            photo_task: None,
            should_quit: false,
        }
    }

    /// Main event loop: apply completions → draw → poll input → dispatch.
    ///
    /// Must be called from within a tokio runtime.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            self.process_form_events();
            self.screen.tick();
            terminal.draw(|frame| {
                let area = frame.area();
                draw_profile(&mut self.screen, frame, area);
            })?;
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }
        self.shutdown();
        Ok(())
    }

    /// Handles a key event. Only presses are acted on.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = self.screen.handle_key(key);
        self.apply(action);
    }

    /// Handles a mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let action = self.screen.handle_mouse(mouse);
        self.apply(action);
    }

    /// Applies every completion that has arrived since the last call.
    pub fn process_form_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            tracing::trace!(?event, "form event");
            self.screen.apply_event(event);
        }
    }

    /// Returns the profile screen.
    pub fn screen(&self) -> &ProfileScreen {
        &self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::LoadPhoto(request) => {
                if let Some(task) = self.photo_task.take() {
                    task.abort();
                }
                self.photo_task = Some(spawn_photo_read(request, self.events_tx.clone()));
            }
            Action::StartSubmit(ticket) => {
                let timer = SubmitTimer::start(self.submit_delay, ticket, self.events_tx.clone());
                if let Some(previous) = self.submit_timer.replace(timer) {
                    previous.cancel();
                }
            }
        }
    }

    /// Cancels background work that has not finished.
    fn shutdown(&mut self) {
        if let Some(timer) = self.submit_timer.take() {
            timer.cancel();
        }
        if let Some(task) = self.photo_task.take() {
            task.abort();
        }
    }
}
