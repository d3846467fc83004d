use crate::{Answer, Frame, Key, PromptConfig, Stdio, SurveyError};

/// Trait for widgets that can take user input and return an answer.
///
/// The ask loop drives a widget through `prompt`, `error` (on every rejected
/// answer) and finally `cleanup` with the accepted answer. Optional
/// capabilities are discovered through the `as_*` accessors rather than by
/// inspecting concrete widget types.
pub trait Prompt {
    /// Interact with the user until an answer is available.
    fn prompt(&mut self, config: &PromptConfig) -> Result<Answer, SurveyError>;

    /// Paint the final "answered" state.
    fn cleanup(&mut self, config: &PromptConfig, answer: &Answer) -> Result<(), SurveyError>;

    /// Show a validation message for the last answer.
    fn error(&mut self, message: &str) -> Result<(), SurveyError>;

    /// Re-prompt capability, if this widget can ask again with context.
    fn as_prompt_again(&mut self) -> Option<&mut dyn PromptAgain> {
        None
    }

    /// I/O injection capability, if this widget talks to a terminal.
    fn as_wants_stdio(&mut self) -> Option<&mut dyn WantsStdio> {
        None
    }
}

/// Widgets that can prompt again after invalid input, knowing what was rejected.
pub trait PromptAgain {
    fn prompt_again(
        &mut self,
        config: &PromptConfig,
        invalid: &Answer,
        message: &str,
    ) -> Result<Answer, SurveyError>;
}

/// Widgets that accept the key source and renderer chosen by the caller.
pub trait WantsStdio {
    fn with_stdio(&mut self, stdio: Stdio);
}

/// Source of decoded key events.
///
/// `read_key` blocks until the next key is available. Raw mode is entered and
/// left through `Stdio::raw_mode`, which guarantees the restore.
pub trait KeySource {
    fn read_key(&mut self) -> Result<Key, SurveyError>;

    fn enter_raw_mode(&mut self) -> Result<(), SurveyError> {
        Ok(())
    }

    fn restore_mode(&mut self) -> Result<(), SurveyError> {
        Ok(())
    }
}

/// Paints frames to the user.
pub trait Renderer {
    fn render(&mut self, frame: &Frame) -> Result<(), SurveyError>;

    /// Paint a validation message above the prompt.
    fn render_error(&mut self, message: &str) -> Result<(), SurveyError>;

    fn hide_cursor(&mut self) -> Result<(), SurveyError> {
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), SurveyError> {
        Ok(())
    }
}
