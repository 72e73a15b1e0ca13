//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod field_input_handler;
pub mod form;

// Re-export for convenience
pub use field_input_handler::{
    handle_activate, handle_backspace, handle_char_input, handle_clear_field, handle_next_field,
    handle_prev_field, handle_toggle_round_up,
};
pub use form::{FormField, FormState};
