//! Scrolling form widget for the profile fields.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::{FieldState, ProfileForm};
use crate::model::{FieldId, InputKind};

/// Terminal rows used by each field (border, value, border).
pub const ROW_HEIGHT: u16 = 3;

/// Scroll position of the field list.
///
/// Normally the offset only moves as far as needed to keep the focused field
/// on screen. After [`request_center`](Self::request_center) the next
/// [`resolve`](Self::resolve) places that field in the middle instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormScroll {
    offset: usize,
    pending_center: Option<usize>,
}

impl FormScroll {
    /// Returns the index of the first visible field.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Asks for the field at `index` to be centred on the next resolve.
    pub fn request_center(&mut self, index: usize) {
        self.pending_center = Some(index);
    }

    /// Computes the offset for a viewport showing `capacity` of `len` fields.
    pub fn resolve(&mut self, focus: usize, len: usize, capacity: usize) -> usize {
        if capacity == 0 || len == 0 {
            self.pending_center = None;
            self.offset = 0;
            return 0;
        }
        if let Some(index) = self.pending_center.take() {
            self.offset = index.saturating_sub(capacity / 2);
        }
        if focus < self.offset {
            self.offset = focus;
        } else if focus >= self.offset + capacity {
            self.offset = focus + 1 - capacity;
        }
        self.offset = self.offset.min(len.saturating_sub(capacity));
        self.offset
    }
}

/// Returns the last `width` characters of `value`.
pub fn visible_tail(value: &str, width: usize) -> &str {
    let count = value.chars().count();
    if count <= width {
        return value;
    }
    match value.char_indices().nth(count - width) {
        Some((start, _)) => &value[start..],
        None => "",
    }
}

/// Renders the visible slice of the form's fields within `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &ProfileForm, scroll: &mut FormScroll, frame: &mut Frame, area: Rect) {
    let capacity = usize::from(area.height / ROW_HEIGHT);
    let offset = scroll.resolve(form.focus(), form.fields().len(), capacity);

    let visible: Vec<(usize, &FieldState)> = form
        .fields()
        .iter()
        .enumerate()
        .skip(offset)
        .take(capacity)
        .collect();

    let mut constraints: Vec<Constraint> = visible
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    for (row, (index, field)) in visible.into_iter().enumerate() {
        let counter = (field.id() == FieldId::Description)
            .then(|| (form.char_count(), form.char_limit()));
        draw_field(field, index == form.focus(), counter, frame, rows[row]);
    }
}

#[mutants::skip]
fn draw_field(
    field: &FieldState,
    is_focused: bool,
    counter: Option<(usize, usize)>,
    frame: &mut Frame,
    area: Rect,
) {
    let descriptor = field.descriptor();

    let border_color = if field.is_invalid() {
        Color::Red
    } else if is_focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let label = if descriptor.required {
        format!("{} *", descriptor.label)
    } else {
        descriptor.label.to_string()
    };

    let mut block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some((count, limit)) = counter {
        block = block.title(Line::from(format!(" {count}/{limit} ")).right_aligned());
    }

    let inner_width = usize::from(area.width.saturating_sub(3));
    let spans = match descriptor.input {
        InputKind::Select(_) => {
            let (text, style) = if field.value().is_empty() {
                ("Select...", Style::default().fg(Color::DarkGray))
            } else {
                (field.value(), Style::default())
            };
            vec![Span::raw("< "), Span::styled(text, style), Span::raw(" >")]
        }
        InputKind::Text | InputKind::TextArea | InputKind::File => {
            let mut spans = vec![Span::raw(visible_tail(field.value(), inner_width))];
            if is_focused {
                spans.push(Span::styled(
                    "\u{2588}",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            spans
        }
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);

    // Error text sits on the bottom border of the field.
    if let Some(err) = field.error() {
        let error_line = Paragraph::new(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        ));
        let err_area = Rect {
            x: area.x + 2,
            y: area.y + ROW_HEIGHT.saturating_sub(1),
            width: area.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(error_line, err_area);
    }
}
