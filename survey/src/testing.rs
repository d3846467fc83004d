//! Scripted key sources and recording renderers for testing surveys without a
//! terminal.
//!
//! ```rust,ignore
//! let (stdio, transcript) = scripted_stdio(keys("red\r"));
//! let mut color = String::new();
//! ask_one(&mut Select::new("Color?", ["red", "blue"]), &mut color, [with_stdio(stdio)])?;
//! assert_eq!(transcript.frames().len(), 5);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use survey_types::{Frame, Key, KeySource, Renderer, Stdio, SurveyError};

/// Decode a string into keys, one per character.
///
/// Control characters map to their named keys, so `"\r"` is `Key::Enter` and
/// `"\u{3}"` is `Key::Interrupt`.
pub fn keys(script: &str) -> Vec<Key> {
    script.chars().map(Key::from_char).collect()
}

/// A `Stdio` that replays `keys` and records everything painted.
pub fn scripted_stdio(keys: impl IntoIterator<Item = Key>) -> (Stdio, Transcript) {
    let transcript = Transcript::default();
    let stdio = Stdio::new(
        ScriptedKeys::new(keys, transcript.clone()),
        RecordingRenderer::new(transcript.clone()),
    );
    (stdio, transcript)
}

#[derive(Debug, Default)]
struct Recorded {
    frames: Vec<Frame>,
    errors: Vec<String>,
    raw_mode: bool,
    cursor_hidden: bool,
    keys_read: usize,
}

/// Shared log of what a scripted survey did.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    inner: Rc<RefCell<Recorded>>,
}

impl Transcript {
    /// Every frame painted so far, in order.
    pub fn frames(&self) -> Vec<Frame> {
        self.inner.borrow().frames.clone()
    }

    pub fn last_frame(&self) -> Option<Frame> {
        self.inner.borrow().frames.last().cloned()
    }

    /// Validation messages shown, in order.
    pub fn errors(&self) -> Vec<String> {
        self.inner.borrow().errors.clone()
    }

    /// Whether raw mode is currently on.
    pub fn in_raw_mode(&self) -> bool {
        self.inner.borrow().raw_mode
    }

    pub fn cursor_hidden(&self) -> bool {
        self.inner.borrow().cursor_hidden
    }

    /// Number of keys consumed from the script.
    pub fn keys_read(&self) -> usize {
        self.inner.borrow().keys_read
    }
}

/// Replays a fixed key script.
///
/// Reading past the end of the script fails with an I/O error, so a test that
/// forgets its Enter key does not hang.
#[derive(Debug)]
pub struct ScriptedKeys {
    script: VecDeque<Key>,
    transcript: Transcript,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>, transcript: Transcript) -> Self {
        Self {
            script: keys.into_iter().collect(),
            transcript,
        }
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Result<Key, SurveyError> {
        let key = self.script.pop_front().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "key script exhausted")
        })?;
        self.transcript.inner.borrow_mut().keys_read += 1;
        Ok(key)
    }

    fn enter_raw_mode(&mut self) -> Result<(), SurveyError> {
        self.transcript.inner.borrow_mut().raw_mode = true;
        Ok(())
    }

    fn restore_mode(&mut self) -> Result<(), SurveyError> {
        self.transcript.inner.borrow_mut().raw_mode = false;
        Ok(())
    }
}

/// Records frames instead of painting them.
#[derive(Debug)]
pub struct RecordingRenderer {
    transcript: Transcript,
}

impl RecordingRenderer {
    pub fn new(transcript: Transcript) -> Self {
        Self { transcript }
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &Frame) -> Result<(), SurveyError> {
        self.transcript.inner.borrow_mut().frames.push(frame.clone());
        Ok(())
    }

    fn render_error(&mut self, message: &str) -> Result<(), SurveyError> {
        self.transcript
            .inner
            .borrow_mut()
            .errors
            .push(message.to_string());
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), SurveyError> {
        self.transcript.inner.borrow_mut().cursor_hidden = true;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), SurveyError> {
        self.transcript.inner.borrow_mut().cursor_hidden = false;
        Ok(())
    }
}
