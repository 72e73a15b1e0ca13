//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod form;
mod help;
pub mod number_field;
pub mod round_up_switch;
mod styles;

pub use form::{render_form, BILL_LABEL, RESULT_PREFIX, TIP_LABEL, TITLE};
pub use help::render_help_overlay;
pub use number_field::NumberField;
pub use round_up_switch::{RoundUpSwitch, ROUND_UP_LABEL};
pub use styles::{ColorConfig, FormStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{CurrencyFormatter, KeyAction};
use crate::state::{
    handle_activate, handle_backspace, handle_char_input, handle_clear_field, handle_next_field,
    handle_prev_field, handle_toggle_round_up, FormState,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    form: FormState,
    formatter: Box<dyn CurrencyFormatter>,
    key_bindings: KeyBindings,
    styles: FormStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        form: FormState,
        formatter: Box<dyn CurrencyFormatter>,
        styles: FormStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, form, formatter, styles))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create a TuiApp over an already-initialized terminal.
    ///
    /// No terminal modes are touched, so this works with `TestBackend`.
    pub fn with_terminal(
        terminal: Terminal<B>,
        form: FormState,
        formatter: Box<dyn CurrencyFormatter>,
        styles: FormStyles,
    ) -> Self {
        Self {
            terminal,
            form,
            formatter,
            key_bindings: KeyBindings::default(),
            styles,
        }
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Blocks on input: nothing on screen can
    /// change without an event, so there is no timer.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(_, _) => self.draw()?,
                _ => {}
            }
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C should always quit, even if the help overlay is open
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.form.help_visible {
            return self.handle_help_key(key);
        }

        // Typed characters go straight into a focused text field
        if self.form.focus.is_text() {
            match key.code {
                KeyCode::Char(ch)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.update(|form| handle_char_input(form, ch));
                    return false;
                }
                KeyCode::Backspace => {
                    self.update(handle_backspace);
                    return false;
                }
                _ => {} // Fall through to key binding dispatch
            }
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false,
        };
        debug!(?action, focus = ?self.form.focus, "Key action");

        match action {
            KeyAction::NextField => self.update(handle_next_field),
            KeyAction::PrevField => self.update(handle_prev_field),
            KeyAction::Activate => self.update(handle_activate),
            KeyAction::ToggleRoundUp => self.update(handle_toggle_round_up),
            KeyAction::ClearField => self.update(handle_clear_field),
            KeyAction::Help => self.form.help_visible = true,
            KeyAction::Quit => return true,
        }

        false
    }

    /// Keys while the help overlay is open.
    ///
    /// Esc and the help keys close it; the other quit keys still quit.
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc {
            self.form.help_visible = false;
            return false;
        }

        match self.key_bindings.get(key) {
            Some(KeyAction::Help) => {
                self.form.help_visible = false;
                false
            }
            Some(KeyAction::Quit) => true,
            _ => false,
        }
    }

    fn update(&mut self, transition: impl FnOnce(FormState) -> FormState) {
        self.form = transition(std::mem::take(&mut self.form));
    }

    /// Recompute the tip and render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let formatted = self.formatted_tip();
        debug!(
            bill = %self.form.bill_text,
            tip = %self.form.tip_text,
            round_up = self.form.round_up,
            result = %formatted,
            "Recomputed tip"
        );

        let form = &self.form;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_form(frame, form, &formatted, styles);
        })?;

        Ok(())
    }

    /// Formatted tip for the current form contents.
    pub fn formatted_tip(&self) -> String {
        self.form.formatted_tip(self.formatter.as_ref())
    }

    /// Current form state.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Underlying terminal, for buffer inspection with `TestBackend`.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the interactive form
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_form(
    form: FormState,
    formatter: Box<dyn CurrencyFormatter>,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(form, formatter, FormStyles::with_color_config(colors)) {
        Ok(app) => app,
        Err(e) => {
            // Raw mode may already be on
            let _ = restore_terminal();
            return Err(e);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
