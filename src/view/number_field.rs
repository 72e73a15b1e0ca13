//! Bordered text field for numeric input.

use super::styles::FormStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Labelled number field.
///
/// The label sits in the top border. An optional suffix (e.g. `%`) is drawn
/// after the text in the muted style.
pub struct NumberField<'a> {
    label: &'a str,
    text: &'a str,
    suffix: Option<&'a str>,
    focused: bool,
    styles: &'a FormStyles,
}

impl<'a> NumberField<'a> {
    /// Create a field showing `text` under `label`.
    pub fn new(label: &'a str, text: &'a str, focused: bool, styles: &'a FormStyles) -> Self {
        Self {
            label,
            text,
            suffix: None,
            focused,
            styles,
        }
    }

    /// Trailing unit shown after the text.
    pub fn suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    /// Terminal cursor position at the end of the text.
    ///
    /// Clamped to the inner area so an overlong entry never puts the cursor
    /// on the border.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let text_width = u16::try_from(self.text.width()).unwrap_or(u16::MAX);
        let max_offset = inner.width.saturating_sub(1);
        Position::new(inner.x + text_width.min(max_offset), inner.y)
    }
}

impl Widget for NumberField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            self.styles.label
        };

        let mut spans = vec![Span::raw(self.text)];
        if let Some(suffix) = self.suffix {
            spans.push(Span::styled(format!(" {suffix}"), self.styles.muted));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.label))
                .border_style(border_style),
        );

        paragraph.render(area, buf);
    }
}
