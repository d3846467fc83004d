//! Single-line text prompt.

use survey_types::{
    Answer, Frame, HELP_INPUT, InputFrame, Key, Prompt, PromptAgain, PromptConfig, Stdio,
    SurveyError, WantsStdio,
};

use crate::line::{LineEditor, LineEvent};
use crate::terminal;

/// Asks for a line of free text.
///
/// An empty submission answers with the default, if any. Typing `?` on its own
/// and pressing Enter reveals the help text. After a validation failure the
/// rejected text is offered again for editing.
#[derive(Debug)]
pub struct Input {
    message: String,
    default: Option<String>,
    help: Option<String>,
    editor: LineEditor,
    show_help: bool,
    stdio: Option<Stdio>,
}

impl Input {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: None,
            help: None,
            editor: LineEditor::default(),
            show_help: false,
            stdio: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into()).filter(|help| !help.is_empty());
        self
    }

    fn frame(&self) -> InputFrame {
        InputFrame {
            message: self.message.clone(),
            default: self.default.clone(),
            help: self.help.clone(),
            show_help: self.show_help,
            line: self.editor.line().to_string(),
            answer: None,
        }
    }

    fn stdio(&mut self) -> Stdio {
        self.stdio.get_or_insert_with(terminal::stdio).clone()
    }

    /// Edit `self.editor` until the user submits.
    fn read_line(&mut self) -> Result<String, SurveyError> {
        let stdio = self.stdio();
        stdio.render(&Frame::Input(self.frame()))?;
        let _raw = stdio.raw_mode()?;

        loop {
            let key = stdio.read_key()?;
            tracing::trace!(?key, "input key");
            let event = match key {
                Key::Interrupt => return Err(SurveyError::Interrupted),
                Key::EndOfTransmission => LineEvent::Submit,
                key => self.editor.apply(key),
            };

            if event == LineEvent::Submit {
                if self.help.is_some() && self.editor.line() == HELP_INPUT.to_string() {
                    self.show_help = true;
                    self.editor.clear();
                    stdio.render(&Frame::Input(self.frame()))?;
                    continue;
                }
                let line = self.editor.take();
                return Ok(match &self.default {
                    Some(default) if line.is_empty() => default.clone(),
                    _ => line,
                });
            }

            stdio.render(&Frame::Input(self.frame()))?;
        }
    }
}

impl Prompt for Input {
    fn prompt(&mut self, _config: &PromptConfig) -> Result<Answer, SurveyError> {
        self.editor.clear();
        self.show_help = false;
        self.read_line().map(Answer::Text)
    }

    fn cleanup(&mut self, _config: &PromptConfig, answer: &Answer) -> Result<(), SurveyError> {
        let frame = InputFrame {
            answer: Some(answer.to_string()),
            line: String::new(),
            ..self.frame()
        };
        self.stdio().render(&Frame::Input(frame))
    }

    fn error(&mut self, message: &str) -> Result<(), SurveyError> {
        self.stdio().render_error(message)
    }

    fn as_prompt_again(&mut self) -> Option<&mut dyn PromptAgain> {
        Some(self)
    }

    fn as_wants_stdio(&mut self) -> Option<&mut dyn WantsStdio> {
        Some(self)
    }
}

impl PromptAgain for Input {
    fn prompt_again(
        &mut self,
        _config: &PromptConfig,
        invalid: &Answer,
        _message: &str,
    ) -> Result<Answer, SurveyError> {
        self.editor = LineEditor::with_text(&invalid.to_string());
        self.read_line().map(Answer::Text)
    }
}

impl WantsStdio for Input {
    fn with_stdio(&mut self, stdio: Stdio) {
        self.stdio = Some(stdio);
    }
}
