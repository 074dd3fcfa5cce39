//! Success dialog shown after a completed submission.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::form::ModalTarget;
use crate::model::PetProfile;

/// Returns a rectangle of `percent_x` by `percent_y` centred in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}

/// Returns the dialog's content area within the full screen `area`.
pub fn modal_area(area: Rect) -> Rect {
    centered_rect(60, 50, area)
}

/// Classifies a click at (`column`, `row`) as landing on the dialog or the backdrop.
pub fn hit_test(area: Rect, column: u16, row: u16) -> ModalTarget {
    if modal_area(area).contains(Position::new(column, row)) {
        ModalTarget::Content
    } else {
        ModalTarget::Backdrop
    }
}

/// Style applied to the screen behind the dialog.
const BACKDROP_STYLE: Style = Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM);

/// Renders the success dialog over a dimmed backdrop covering `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_modal(profile: Option<&PetProfile>, frame: &mut Frame, area: Rect) {
    frame.buffer_mut().set_style(area, BACKDROP_STYLE);
    let dialog = modal_area(area);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(" Success ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let message = match profile {
        Some(p) if !p.pet_name.is_empty() => {
            format!("{}'s profile has been created successfully.", p.pet_name)
        }
        _ => "Your pet's profile has been created successfully.".to_string(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "\u{2714} Profile Created!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc or click outside to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, dialog);
}
