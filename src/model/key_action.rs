//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
///
/// Printable characters typed into a focused text field never reach the
/// bindings; they edit the field directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Focus navigation
    /// Move focus to the next form row. Default: Tab/↓
    NextField,
    /// Move focus to the previous form row. Default: Shift+Tab/↑
    PrevField,
    /// Confirm the focused row: advance from a text field, flip the switch. Default: Enter
    Activate,

    // Editing
    /// Flip the round-up switch. Default: Space (switch row), Ctrl+r
    ToggleRoundUp,
    /// Clear the focused text field. Default: Ctrl+u
    ClearField,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: F1/?
    Help,
    /// Exit the application. Default: Esc/q/Ctrl+c
    Quit,
}
