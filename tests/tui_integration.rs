//! TUI integration tests.
//!
//! Drive the whole form through key events on a TestBackend and check what
//! ends up on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use tiptime::model::{Locale, LocaleCurrencyFormatter};
use tiptime::state::{FormField, FormState};
use tiptime::view::{ColorConfig, FormStyles, TuiApp};

// ===== Test Helpers =====

fn app_for(locale: &str, form: FormState) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
    let locale = Locale::parse(locale).unwrap();
    TuiApp::with_terminal(
        terminal,
        form,
        Box::new(LocaleCurrencyFormatter::for_locale(&locale)),
        FormStyles::with_color_config(ColorConfig::from_env_and_args(true)),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut TuiApp<TestBackend>, text: &str) {
    for ch in text.chars() {
        assert!(!app.handle_key(key(KeyCode::Char(ch))));
    }
}

/// Convert a ratatui buffer to text, one line per row, trailing blanks trimmed.
fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn screen(app: &mut TuiApp<TestBackend>) -> String {
    app.draw().unwrap();
    buffer_to_string(app.terminal().backend().buffer())
}

// ===== Scenarios =====

#[test]
fn fresh_form_shows_zero_tip() {
    let mut app = app_for("en-US", FormState::new());
    let text = screen(&mut app);

    assert!(text.contains("Calculate Tip"));
    assert!(text.contains("Bill Amount"));
    assert!(text.contains("Tip Percentage"));
    assert!(text.contains("Round up tip?"));
    assert!(text.contains("Tip Amount: $0.00"));
}

#[test]
fn typing_bill_and_tip_shows_tip() {
    let mut app = app_for("en-US", FormState::new());
    type_text(&mut app, "10.00");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "15");

    assert!(screen(&mut app).contains("Tip Amount: $1.50"));
}

#[test]
fn toggling_round_up_rounds_the_tip() {
    let mut app = app_for("en-US", FormState::new());
    type_text(&mut app, "10.00");
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "18");
    assert!(screen(&mut app).contains("Tip Amount: $1.80"));

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.form().focus, FormField::RoundUp);
    app.handle_key(key(KeyCode::Char(' ')));

    let text = screen(&mut app);
    assert!(text.contains("[ ON]"));
    assert!(text.contains("Tip Amount: $2.00"));
}

#[test]
fn empty_tip_field_gives_zero() {
    let mut app = app_for("en-US", FormState::prefilled("50.00", "", false));
    assert!(screen(&mut app).contains("Tip Amount: $0.00"));
}

#[test]
fn empty_bill_field_gives_zero() {
    let mut app = app_for("en-US", FormState::prefilled("", "20", false));
    assert!(screen(&mut app).contains("Tip Amount: $0.00"));
}

#[test]
fn result_uses_locale_conventions() {
    let mut app = app_for("de-DE", FormState::prefilled("8226.40", "15", false));
    // 1233.96 formatted with German separators and a trailing euro sign
    assert!(screen(&mut app).contains("Tip Amount: 1.233,96\u{a0}€"));
}

#[test]
fn clearing_bill_resets_result() {
    let mut app = app_for("en-US", FormState::prefilled("10", "15", false));
    assert!(screen(&mut app).contains("$1.50"));

    app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(app.form().bill_text, "");
    assert!(screen(&mut app).contains("Tip Amount: $0.00"));
}

#[test]
fn help_overlay_opens_and_closes() {
    let mut app = app_for("en-US", FormState::new());
    app.handle_key(key(KeyCode::F(1)));
    assert!(screen(&mut app).contains("Keyboard Shortcuts"));

    app.handle_key(key(KeyCode::Esc));
    assert!(!screen(&mut app).contains("Keyboard Shortcuts"));
}

#[test]
fn esc_without_overlay_quits() {
    let mut app = app_for("en-US", FormState::new());
    assert!(app.handle_key(key(KeyCode::Esc)));
}
