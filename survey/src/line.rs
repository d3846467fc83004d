use survey_types::Key;

/// What a key did to a line being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineEvent {
    Submit,
    Edited,
    Ignored,
}

/// Minimal single-line editor shared by the text prompts.
#[derive(Debug, Clone, Default)]
pub(crate) struct LineEditor {
    line: String,
}

impl LineEditor {
    pub(crate) fn with_text(text: &str) -> Self {
        Self {
            line: text.to_string(),
        }
    }

    pub(crate) fn line(&self) -> &str {
        &self.line
    }

    pub(crate) fn clear(&mut self) {
        self.line.clear();
    }

    pub(crate) fn take(&mut self) -> String {
        std::mem::take(&mut self.line)
    }

    pub(crate) fn apply(&mut self, key: Key) -> LineEvent {
        match key {
            Key::Enter => LineEvent::Submit,
            Key::DeleteWord => {
                let trimmed = self.line.trim_end();
                let cut = trimmed
                    .rfind(char::is_whitespace)
                    .map_or(0, |i| i + trimmed[i..].chars().next().map_or(1, char::len_utf8));
                self.line.truncate(cut);
                LineEvent::Edited
            }
            Key::DeleteLine => {
                self.line.clear();
                LineEvent::Edited
            }
            Key::Backspace | Key::Delete => {
                self.line.pop();
                LineEvent::Edited
            }
            key => match key.printable() {
                Some(c) => {
                    self.line.push(c);
                    LineEvent::Edited
                }
                None => LineEvent::Ignored,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> LineEditor {
        let mut editor = LineEditor::default();
        for c in text.chars() {
            editor.apply(Key::Char(c));
        }
        editor
    }

    #[test]
    fn typing_and_backspace() {
        let mut editor = typed("héllo");
        assert_eq!(editor.apply(Key::Backspace), LineEvent::Edited);
        assert_eq!(editor.line(), "héll");

        for _ in 0..3 {
            editor.apply(Key::Backspace);
        }
        assert_eq!(editor.line(), "h");
    }

    #[test]
    fn delete_word_keeps_earlier_words() {
        let mut editor = typed("hello big world  ");
        editor.apply(Key::DeleteWord);
        assert_eq!(editor.line(), "hello big ");
        editor.apply(Key::DeleteWord);
        editor.apply(Key::DeleteWord);
        assert_eq!(editor.line(), "");
    }

    #[test]
    fn enter_submits_and_arrows_are_ignored() {
        let mut editor = typed("x");
        assert_eq!(editor.apply(Key::Up), LineEvent::Ignored);
        assert_eq!(editor.apply(Key::Enter), LineEvent::Submit);
        assert_eq!(editor.take(), "x");
        assert_eq!(editor.line(), "");
    }
}
