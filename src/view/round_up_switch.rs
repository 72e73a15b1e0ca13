//! Round-up switch row.

use super::styles::FormStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Label shown on the switch row.
pub const ROUND_UP_LABEL: &str = "Round up tip?";

const MARKER_ON: &str = "[ ON]";
const MARKER_OFF: &str = "[OFF]";

/// Single-line switch: label on the left, state marker on the right.
pub struct RoundUpSwitch<'a> {
    on: bool,
    focused: bool,
    styles: &'a FormStyles,
}

impl<'a> RoundUpSwitch<'a> {
    /// Create a switch in the given state.
    pub fn new(on: bool, focused: bool, styles: &'a FormStyles) -> Self {
        Self {
            on,
            focused,
            styles,
        }
    }
}

impl Widget for RoundUpSwitch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (marker, marker_style) = if self.on {
            (MARKER_ON, self.styles.switch_on)
        } else {
            (MARKER_OFF, self.styles.switch_off)
        };
        let (pointer, label_style) = if self.focused {
            ("> ", self.styles.focused_border)
        } else {
            ("  ", self.styles.label)
        };

        let used = pointer.len() + ROUND_UP_LABEL.len() + marker.len();
        let gap = usize::from(area.width).saturating_sub(used).max(1);

        let line = Line::from(vec![
            Span::styled(pointer, label_style),
            Span::styled(ROUND_UP_LABEL, label_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(marker, marker_style),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
