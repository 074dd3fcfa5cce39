//! Photo preview pane.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::PhotoPreview;

/// Characters of the data URL shown in the populated preview.
const URL_HEAD_CHARS: usize = 28;

/// Builds the text lines for the preview pane.
pub fn preview_lines(preview: &PhotoPreview) -> Vec<Line<'_>> {
    match preview {
        PhotoPreview::Empty => {
            let dim = Style::default().fg(Color::DarkGray);
            vec![
                Line::from(""),
                Line::from(Span::styled("\u{250c}\u{2500}\u{2500}\u{2500}\u{2510}", dim)),
                Line::from(Span::styled("\u{2502} \u{25c9} \u{2502}", dim)),
                Line::from(Span::styled("\u{2514}\u{2500}\u{2500}\u{2500}\u{2518}", dim)),
                Line::from(""),
                Line::from(Span::styled("No photo selected", dim)),
            ]
        }
        PhotoPreview::Populated { path, data_url } => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let head: String = data_url.as_str().chars().take(URL_HEAD_CHARS).collect();
            vec![
                Line::from(""),
                Line::from(Span::styled(name, Style::default().fg(Color::Cyan))),
                Line::from(data_url.mime()),
                Line::from(format!("{} bytes encoded", data_url.payload_len())),
                Line::from(""),
                Line::from(Span::styled(
                    format!("{head}\u{2026}"),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
    }
}

/// Renders the preview pane.
#[mutants::skip]
pub fn draw_photo_preview(preview: &PhotoPreview, frame: &mut Frame, area: Rect) {
    let border_color = if preview.is_empty() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Photo ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(preview_lines(preview))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
