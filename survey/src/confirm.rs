//! Yes/no prompt.

use survey_types::{
    Answer, ConfirmFrame, Frame, HELP_INPUT, Key, Prompt, PromptConfig, Stdio, SurveyError,
    WantsStdio,
};

use crate::line::{LineEditor, LineEvent};
use crate::terminal;

/// Asks a yes/no question; the answer is `Answer::Bool`.
///
/// Accepts `y`, `yes`, `n` and `no` in any case. An empty line answers with
/// the default. Anything else is reported and the question stays open.
#[derive(Debug, Default)]
pub struct Confirm {
    message: String,
    default: bool,
    help: Option<String>,
    editor: LineEditor,
    show_help: bool,
    stdio: Option<Stdio>,
}

impl Confirm {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into()).filter(|help| !help.is_empty());
        self
    }

    fn frame(&self) -> ConfirmFrame {
        ConfirmFrame {
            message: self.message.clone(),
            default: self.default,
            help: self.help.clone(),
            show_help: self.show_help,
            line: self.editor.line().to_string(),
            answer: None,
        }
    }

    fn stdio(&mut self) -> Stdio {
        self.stdio.get_or_insert_with(terminal::stdio).clone()
    }
}

fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

impl Prompt for Confirm {
    fn prompt(&mut self, _config: &PromptConfig) -> Result<Answer, SurveyError> {
        self.editor.clear();
        self.show_help = false;

        let stdio = self.stdio();
        stdio.render(&Frame::Confirm(self.frame()))?;
        let _raw = stdio.raw_mode()?;

        loop {
            let event = match stdio.read_key()? {
                Key::Interrupt => return Err(SurveyError::Interrupted),
                Key::EndOfTransmission => LineEvent::Submit,
                key => self.editor.apply(key),
            };

            if event == LineEvent::Submit {
                let line = self.editor.take();
                if line.is_empty() {
                    return Ok(Answer::Bool(self.default));
                }
                if self.help.is_some() && line == HELP_INPUT.to_string() {
                    self.show_help = true;
                } else if let Some(answer) = parse_yes_no(&line) {
                    return Ok(Answer::Bool(answer));
                } else {
                    tracing::debug!(%line, "unrecognised confirm answer");
                    stdio.render_error(&format!(
                        "{line:?} is not a valid answer, please try again."
                    ))?;
                }
            }

            stdio.render(&Frame::Confirm(self.frame()))?;
        }
    }

    fn cleanup(&mut self, _config: &PromptConfig, answer: &Answer) -> Result<(), SurveyError> {
        let frame = ConfirmFrame {
            answer: Some(answer.as_bool().unwrap_or(self.default)),
            line: String::new(),
            ..self.frame()
        };
        self.stdio().render(&Frame::Confirm(frame))
    }

    fn error(&mut self, message: &str) -> Result<(), SurveyError> {
        self.stdio().render_error(message)
    }

    fn as_wants_stdio(&mut self) -> Option<&mut dyn WantsStdio> {
        Some(self)
    }
}

impl WantsStdio for Confirm {
    fn with_stdio(&mut self, stdio: Stdio) {
        self.stdio = Some(stdio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{keys, scripted_stdio};

    const CONFIG: PromptConfig = PromptConfig { page_size: 7 };

    fn confirm(script: &str, prompt: Confirm) -> (Answer, crate::testing::Transcript) {
        let (stdio, transcript) = scripted_stdio(keys(script));
        let mut prompt = prompt;
        prompt.with_stdio(stdio);
        (prompt.prompt(&CONFIG).unwrap(), transcript)
    }

    #[test]
    fn accepts_yes_and_no_in_any_case() {
        for (script, expected) in [("y\r", true), ("YES\r", true), ("n\r", false), ("No\r", false)] {
            let (answer, _) = confirm(script, Confirm::new("Sure?"));
            assert_eq!(answer, Answer::Bool(expected), "script {script:?}");
        }
    }

    #[test]
    fn empty_line_takes_the_default() {
        let (answer, _) = confirm("\r", Confirm::new("Sure?").with_default(true));
        assert_eq!(answer, Answer::Bool(true));
        let (answer, _) = confirm("\r", Confirm::new("Sure?"));
        assert_eq!(answer, Answer::Bool(false));
    }

    #[test]
    fn invalid_answer_is_reported_and_asked_again() {
        let (answer, transcript) = confirm("maybe\ry\r", Confirm::new("Sure?"));
        assert_eq!(answer, Answer::Bool(true));
        assert_eq!(
            transcript.errors(),
            vec!["\"maybe\" is not a valid answer, please try again.".to_string()]
        );
    }

    #[test]
    fn question_mark_reveals_help() {
        let (answer, transcript) = confirm("?\ry\r", Confirm::new("Sure?").with_help("Say yes"));
        assert_eq!(answer, Answer::Bool(true));
        assert!(transcript.errors().is_empty());
        assert!(matches!(&transcript.frames()[2], Frame::Confirm(f) if f.show_help));
    }

    #[test]
    fn empty_help_text_makes_question_mark_invalid() {
        let (answer, transcript) = confirm("?\rn\r", Confirm::new("Sure?").with_help(""));
        assert_eq!(answer, Answer::Bool(false));
        assert_eq!(
            transcript.errors(),
            vec!["\"?\" is not a valid answer, please try again.".to_string()]
        );
    }

    #[test]
    fn cleanup_paints_yes_or_no() {
        let (stdio, transcript) = scripted_stdio(Vec::new());
        let mut prompt = Confirm::new("Sure?");
        prompt.with_stdio(stdio);

        prompt.cleanup(&CONFIG, &Answer::Bool(true)).unwrap();
        assert!(matches!(transcript.last_frame(), Some(Frame::Confirm(f)) if f.answer == Some(true)));
    }
}
