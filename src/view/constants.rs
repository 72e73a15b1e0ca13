//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Width of the form column in cells.
///
/// The column is centered horizontally and shrinks to the terminal width
/// when the terminal is narrower.
pub const FORM_WIDTH: u16 = 44;

/// Height of the title line above the form.
pub const TITLE_HEIGHT: u16 = 1;

/// Height of a bordered number field (border + content + border).
pub const NUMBER_FIELD_HEIGHT: u16 = 3;

/// Height of the round-up switch row.
pub const SWITCH_ROW_HEIGHT: u16 = 1;

/// Height of the result line.
pub const RESULT_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for keyboard hints at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
