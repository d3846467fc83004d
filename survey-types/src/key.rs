/// Character that asks a prompt to show its help text.
pub const HELP_INPUT: char = '?';

/// A decoded key event, as yielded by a `KeySource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character typed by the user.
    Char(char),
    Enter,
    Up,
    Down,
    Left,
    Right,
    Escape,
    Backspace,
    Delete,
    /// Delete the word before the cursor (Ctrl+W).
    DeleteWord,
    /// Delete the whole line (Ctrl+U).
    DeleteLine,
    /// Interrupt the survey (Ctrl+C).
    Interrupt,
    /// End of input (Ctrl+D).
    EndOfTransmission,
}

impl Key {
    /// Decode a raw terminal character, mapping ASCII control codes to named keys.
    ///
    /// Codes without a meaning for prompts (e.g. Tab) are returned as `Char`
    /// and are ignored by `is_printable`.
    pub fn from_char(c: char) -> Self {
        match c {
            '\u{3}' => Self::Interrupt,
            '\u{4}' => Self::EndOfTransmission,
            '\u{8}' => Self::Backspace,
            '\r' | '\n' => Self::Enter,
            '\u{15}' => Self::DeleteLine,
            '\u{17}' => Self::DeleteWord,
            '\u{1b}' => Self::Escape,
            '\u{7f}' => Self::Delete,
            c => Self::Char(c),
        }
    }

    /// The character this key types into a text buffer, if any.
    pub fn printable(&self) -> Option<char> {
        match self {
            Self::Char(c) if *c >= ' ' && *c != '\u{7f}' => Some(*c),
            _ => None,
        }
    }

    /// Whether this key types a visible character (space and above).
    pub fn is_printable(&self) -> bool {
        self.printable().is_some()
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}
