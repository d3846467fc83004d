use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use survey_types::{Key, KeySource, SurveyError};

/// Reads key presses from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalKeys {
    raw: bool,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> Result<Key, SurveyError> {
        loop {
            if let Event::Key(event) = event::read()?
                && let Some(key) = decode(event)
            {
                return Ok(key);
            }
        }
    }

    fn enter_raw_mode(&mut self) -> Result<(), SurveyError> {
        enable_raw_mode()?;
        self.raw = true;
        tracing::trace!("raw mode on");
        Ok(())
    }

    fn restore_mode(&mut self) -> Result<(), SurveyError> {
        if self.raw {
            disable_raw_mode()?;
            self.raw = false;
            tracing::trace!("raw mode off");
        }
        Ok(())
    }
}

/// Map a crossterm key event onto a prompt key.
///
/// Releases, repeats and keys prompts have no use for decode to `None`.
pub fn decode(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(Key::Interrupt),
            KeyCode::Char('d') => Some(Key::EndOfTransmission),
            KeyCode::Char('w') => Some(Key::DeleteWord),
            KeyCode::Char('u') => Some(Key::DeleteLine),
            KeyCode::Char('h') => Some(Key::Backspace),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        _ => None,
    }
}
