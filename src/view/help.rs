//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' or F1, dismissed by 'Esc', '?' or F1.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::FormStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &FormStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.section_header),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = percent_of(area.width, percent_x);
    let popup_height = percent_of(area.height, percent_y);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// `percent` of `length`, computed in u32 so wide terminals cannot overflow.
fn percent_of(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(length)
}

fn shortcut(keys: &'static str, description: &'static str, styles: &FormStyles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<12}"), styles.key),
        Span::raw(description),
    ])
}

/// Build the help content lines grouped by category.
fn build_help_content(styles: &FormStyles) -> Vec<Line<'static>> {
    let header = |title: &'static str| Line::from(Span::styled(title, styles.section_header));

    vec![
        header("Fields"),
        shortcut("Tab/↓", "Next field", styles),
        shortcut("Shift+Tab/↑", "Previous field", styles),
        shortcut("Enter", "Next field, or toggle on the switch row", styles),
        shortcut("Backspace", "Delete last character", styles),
        shortcut("Ctrl+u", "Clear field", styles),
        Line::default(),
        header("Round Up"),
        shortcut("Space", "Toggle (on the switch row)", styles),
        shortcut("Ctrl+r", "Toggle from any field", styles),
        Line::default(),
        header("Application"),
        shortcut("?/F1", "Show or hide this help", styles),
        shortcut("Esc", "Close help, or quit", styles),
        shortcut("q", "Quit (outside text fields)", styles),
        shortcut("Ctrl+c", "Quit", styles),
    ]
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
