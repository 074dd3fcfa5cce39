//! Status bar widget — submit control, notices and key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Braille spinner frames shown while a submission is in flight.
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Submit control label.
    pub submit_label: String,
    /// Whether the submit control accepts presses.
    pub submit_enabled: bool,
    /// Animation tick for the loading spinner.
    pub tick: usize,
    /// A notice to show after the control (e.g. a failed photo read).
    pub notice: Option<String>,
}

/// Builds the status line spans.
///
/// Display format:
/// - Enabled:  `[ Create Profile ]  Enter: submit  Tab: next  Esc: quit`
/// - Disabled: `[ ⠋ Creating Profile... ]` dimmed
/// - A notice, if any, follows the control in red.
pub fn status_spans(ctx: &StatusBarContext) -> Vec<Span<'_>> {
    let mut spans = Vec::new();

    if ctx.submit_enabled {
        spans.push(Span::styled(
            format!("[ {} ]", ctx.submit_label),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        let frame = SPINNER[ctx.tick % SPINNER.len()];
        spans.push(Span::styled(
            format!("[ {frame} {} ]", ctx.submit_label),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(notice) = &ctx.notice {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(notice.as_str(), Style::default().fg(Color::Red)));
    }

    spans.push(Span::styled(
        "  Enter: submit  Tab/Shift+Tab: next/prev  \u{2190}/\u{2192}: choose  Esc: quit",
        Style::default().fg(Color::DarkGray),
    ));
    spans
}

/// Renders the one-line status bar.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    frame.render_widget(Paragraph::new(Line::from(status_spans(ctx))), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(ctx: &StatusBarContext) -> String {
        Line::from(status_spans(ctx)).to_string()
    }

    #[test]
    fn enabled_shows_label() {
        let ctx = StatusBarContext {
            submit_label: "Create Profile".to_string(),
            submit_enabled: true,
            ..Default::default()
        };
        let output = text(&ctx);
        assert!(output.starts_with("[ Create Profile ]"));
        assert!(!SPINNER.iter().any(|f| output.contains(f)));
    }

    #[test]
    fn disabled_shows_spinner() {
        let ctx = StatusBarContext {
            submit_label: "Creating Profile...".to_string(),
            submit_enabled: false,
            tick: 11,
            notice: None,
        };
        assert!(text(&ctx).starts_with("[ ⠙ Creating Profile... ]"));
    }

    #[test]
    fn notice_follows_control() {
        let ctx = StatusBarContext {
            submit_label: "Create Profile".to_string(),
            submit_enabled: true,
            tick: 0,
            notice: Some("not an image file: notes.txt".to_string()),
        };
        let output = text(&ctx);
        let control = output.find("Create Profile").unwrap();
        let notice = output.find("not an image file").unwrap();
        assert!(control < notice);
    }
}
