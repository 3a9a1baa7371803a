use crate::tui::app::{AppState, InputAction};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.agents_on_turn();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map one key press onto the app. Returns `true` to quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('?') => {
            let _ = app.handle_input(InputAction::ToggleHelp);
            return false;
        }
        KeyCode::Char('l') | KeyCode::Char('L') if !app.amount_entry_active() => {
            let _ = app.handle_input(InputAction::ToggleHistory);
            return false;
        }
        _ => {}
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            app.close_help();
        }
        return false;
    }
    if app.history_open() {
        match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::HistoryUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::HistoryDown);
            }
            KeyCode::Esc => app.close_history(),
            _ => {}
        }
        return false;
    }
    if app.amount_entry_active() {
        match code {
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::AmountCancel);
            }
            KeyCode::Enter => {
                if app.handle_input(InputAction::AmountSubmit) {
                    app.agents_on_turn();
                }
            }
            KeyCode::Backspace => {
                let _ = app.handle_input(InputAction::AmountBackspace);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let _ = app.handle_input(InputAction::AmountInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let _ = app.handle_input(InputAction::AmountDec);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let _ = app.handle_input(InputAction::AmountDigit(c as u8 - b'0'));
            }
            _ => {}
        }
        return false;
    }

    let input = match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char(' ') => InputAction::NewDeal,
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::AmountOpen,
        KeyCode::Char('f') | KeyCode::Char('F') => InputAction::Fold,
        KeyCode::Char('c') | KeyCode::Char('C') => InputAction::Call,
        KeyCode::Char('h') | KeyCode::Char('H') => InputAction::Hold,
        _ => return false,
    };
    let acted = app.handle_input(input);
    if acted && matches!(input, InputAction::Fold | InputAction::Call | InputAction::Hold) {
        app.agents_on_turn();
    }
    false
}
