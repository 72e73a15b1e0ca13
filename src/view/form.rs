//! Single-screen calculator form.

use super::constants::{
    FORM_WIDTH, NUMBER_FIELD_HEIGHT, RESULT_HEIGHT, STATUS_BAR_HEIGHT, SWITCH_ROW_HEIGHT,
    TITLE_HEIGHT,
};
use super::help::render_help_overlay;
use super::number_field::NumberField;
use super::round_up_switch::RoundUpSwitch;
use super::styles::FormStyles;
use crate::state::{FormField, FormState};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen title.
pub const TITLE: &str = "Calculate Tip";
/// Label of the bill amount field.
pub const BILL_LABEL: &str = "Bill Amount";
/// Label of the tip percentage field.
pub const TIP_LABEL: &str = "Tip Percentage";
/// Prefix of the result line.
pub const RESULT_PREFIX: &str = "Tip Amount: ";

/// Render the whole screen: form column, status bar, and help overlay.
///
/// `formatted_tip` is the already-formatted result for the current form.
pub fn render_form(
    frame: &mut Frame,
    form: &FormState,
    formatted_tip: &str,
    styles: &FormStyles,
) {
    let [body, status] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    let column = form_column(body);
    let [title_area, _, bill_area, tip_area, switch_area, _, result_area] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(NUMBER_FIELD_HEIGHT),
        Constraint::Length(NUMBER_FIELD_HEIGHT),
        Constraint::Length(SWITCH_ROW_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(RESULT_HEIGHT),
    ])
    .areas(column);

    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, styles.title)).alignment(Alignment::Center),
        title_area,
    );

    let bill = NumberField::new(
        BILL_LABEL,
        &form.bill_text,
        form.focus == FormField::BillAmount,
        styles,
    );
    let tip = NumberField::new(
        TIP_LABEL,
        &form.tip_text,
        form.focus == FormField::TipPercent,
        styles,
    )
    .suffix("%");

    let cursor = match form.focus {
        FormField::BillAmount => Some(bill.cursor_position(bill_area)),
        FormField::TipPercent => Some(tip.cursor_position(tip_area)),
        FormField::RoundUp => None,
    };

    frame.render_widget(bill, bill_area);
    frame.render_widget(tip, tip_area);
    frame.render_widget(
        RoundUpSwitch::new(form.round_up, form.focus == FormField::RoundUp, styles),
        switch_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(RESULT_PREFIX, styles.label),
            Span::styled(formatted_tip, styles.result),
        ]))
        .alignment(Alignment::Center),
        result_area,
    );

    render_status_bar(frame, status, styles);

    if form.help_visible {
        render_help_overlay(frame, styles);
    } else if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

/// Horizontally centered column of at most [`FORM_WIDTH`] cells.
fn form_column(area: Rect) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, styles: &FormStyles) {
    let hints = Paragraph::new(Span::styled(
        " Tab: next field | Ctrl+r: round up | ?: help | Esc: quit",
        styles.muted,
    ));
    frame.render_widget(hints, area);
}
