//! Form input handling (pure state transitions).
//!
//! All functions take the form by value and return the next form. They are
//! testable without a terminal.

use crate::state::{FormField, FormState};

/// Append a character to the focused text field.
///
/// Any character is accepted; text that does not parse simply evaluates to
/// zero. No-op on the switch row.
pub fn handle_char_input(mut form: FormState, ch: char) -> FormState {
    if let Some(text) = form.focused_text_mut() {
        text.push(ch);
    }
    form
}

/// Delete the last character of the focused text field.
///
/// No-op when the field is empty or on the switch row.
pub fn handle_backspace(mut form: FormState) -> FormState {
    if let Some(text) = form.focused_text_mut() {
        text.pop();
    }
    form
}

/// Empty the focused text field. No-op on the switch row.
pub fn handle_clear_field(mut form: FormState) -> FormState {
    if let Some(text) = form.focused_text_mut() {
        text.clear();
    }
    form
}

/// Move focus to the next row, wrapping.
pub fn handle_next_field(mut form: FormState) -> FormState {
    form.focus = form.focus.next();
    form
}

/// Move focus to the previous row, wrapping.
pub fn handle_prev_field(mut form: FormState) -> FormState {
    form.focus = form.focus.prev();
    form
}

/// Flip the round-up switch, whichever row has focus.
pub fn handle_toggle_round_up(mut form: FormState) -> FormState {
    form.round_up = !form.round_up;
    form
}

/// Confirm the focused row.
///
/// On a text field this advances focus like an IME "next" key; on the switch
/// row it flips the switch.
pub fn handle_activate(form: FormState) -> FormState {
    match form.focus {
        FormField::BillAmount | FormField::TipPercent => handle_next_field(form),
        FormField::RoundUp => handle_toggle_round_up(form),
    }
}

#[cfg(test)]
#[path = "field_input_handler_tests.rs"]
mod tests;
