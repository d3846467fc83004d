use std::fmt;

use crate::{Answer, Prompt};

/// Checks an answer after the user has provided it.
///
/// Returning `Err(message)` rejects the answer; the user is shown the message
/// and prompted again.
pub type Validator = Box<dyn Fn(&Answer) -> Result<(), String>>;

/// Turns an accepted answer into a different representation.
///
/// Returning `None` keeps the answer unchanged.
pub type Transformer = Box<dyn Fn(&Answer) -> Option<Answer>>;

/// Global configuration handed to every prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptConfig {
    /// Number of options shown at once by paginated prompts.
    pub page_size: usize,
}

/// A single question in a survey.
pub struct Question {
    /// Name the answer is stored under in the sink.
    name: String,

    /// The widget that collects the answer.
    prompt: Box<dyn Prompt>,

    validate: Option<Validator>,

    transform: Option<Transformer>,
}

impl Question {
    /// Create a new question.
    pub fn new(name: impl Into<String>, prompt: impl Prompt + 'static) -> Self {
        Self {
            name: name.into(),
            prompt: Box::new(prompt),
            validate: None,
            transform: None,
        }
    }

    /// Reject answers that fail `validate`.
    pub fn with_validator(
        mut self,
        validate: impl Fn(&Answer) -> Result<(), String> + 'static,
    ) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    /// Replace accepted answers through `transform`.
    pub fn with_transform(mut self, transform: impl Fn(&Answer) -> Option<Answer> + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Borrow the widget mutably alongside the read-only parts.
    ///
    /// The ask loop needs the widget and the validator at the same time.
    pub fn parts_mut(
        &mut self,
    ) -> (
        &str,
        &mut dyn Prompt,
        Option<&Validator>,
        Option<&Transformer>,
    ) {
        (
            &self.name,
            self.prompt.as_mut(),
            self.validate.as_ref(),
            self.transform.as_ref(),
        )
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("name", &self.name)
            .field("validate", &self.validate.is_some())
            .field("transform", &self.transform.is_some())
            .finish_non_exhaustive()
    }
}
