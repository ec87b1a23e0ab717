use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pageslider::Direction;
use wrap_context::arg_context;

use crate::app::App;

#[rustfmt::skip]
/// Handles the key events and updates the state of [`App`].
pub fn handle_key_events(key_event: KeyEvent, app: &mut App) -> anyhow::Result<()> {
    match key_event.code {
        // Exit application on `ESC` or `q`
        KeyCode::Esc | KeyCode::Char('q') => {
            app.quit();
        }
        // Exit application on `Ctrl-C`
        KeyCode::Char('c') | KeyCode::Char('C') if key_event.modifiers == KeyModifiers::CONTROL => {
            app.quit();
        }
        KeyCode::Left | KeyCode::Char('h') => {
            arg_context!(app.go(Direction::Previous))?
        }
        KeyCode::Right | KeyCode::Char('l') => {
            arg_context!(app.go(Direction::Next))?
        }
        KeyCode::Home | KeyCode::Char('g') => {
            arg_context!(app.first_page())?
        }
        KeyCode::End | KeyCode::Char('G') => {
            arg_context!(app.last_page())?
        }
        // Anything a page parameter could start with, valid or not
        KeyCode::Char(ch) if ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.') => {
            arg_context!(app.input_push(ch))?
        }
        KeyCode::Backspace => {
            arg_context!(app.input_pop())?
        }
        KeyCode::Enter => {
            arg_context!(app.input_submit())?
        }
        _ => {}
    }

    anyhow::Ok(())
}
