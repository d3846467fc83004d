//! The ask loop: prompt, validate, re-prompt, transform, clean up, store.

use std::fmt;

use survey_types::{
    Answer, AnswerSink, Prompt, PromptConfig, Question, Stdio, SurveyError, Transformer, Validator,
};

use crate::terminal;

/// Page size used by paginated prompts unless `with_page_size` says otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Configuration for one call to [`ask`] or [`ask_one`].
pub struct AskOptions {
    /// Key source and renderer handed to every prompt that accepts them.
    pub stdio: Stdio,
    /// Checked after each question's own validator, in registration order.
    pub validators: Vec<Validator>,
    pub prompt_config: PromptConfig,
}

impl Default for AskOptions {
    fn default() -> Self {
        Self {
            stdio: terminal::stdio(),
            validators: Vec::new(),
            prompt_config: PromptConfig {
                page_size: DEFAULT_PAGE_SIZE,
            },
        }
    }
}

impl AskOptions {
    /// Fold `opts` over the defaults, left to right.
    ///
    /// The first option that fails aborts the fold.
    pub fn build(opts: impl IntoIterator<Item = AskOpt>) -> Result<Self, SurveyError> {
        opts.into_iter().try_fold(Self::default(), |mut options, opt| {
            opt(&mut options)?;
            Ok(options)
        })
    }
}

impl fmt::Debug for AskOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AskOptions")
            .field("stdio", &self.stdio)
            .field("validators", &self.validators.len())
            .field("prompt_config", &self.prompt_config)
            .finish()
    }
}

/// A single configuration step for [`ask`].
pub type AskOpt = Box<dyn FnOnce(&mut AskOptions) -> Result<(), SurveyError>>;

/// Talk to `stdio` instead of the process terminal.
pub fn with_stdio(stdio: Stdio) -> AskOpt {
    Box::new(move |options| {
        options.stdio = stdio;
        Ok(())
    })
}

/// Check every answer with `validate`, after the question's own validator.
pub fn with_validator(validate: impl Fn(&Answer) -> Result<(), String> + 'static) -> AskOpt {
    Box::new(move |options| {
        options.validators.push(Box::new(validate));
        Ok(())
    })
}

/// Show `page_size` options at once in paginated prompts.
pub fn with_page_size(page_size: usize) -> AskOpt {
    Box::new(move |options| {
        if page_size == 0 {
            return Err(SurveyError::InvalidOption(
                "page size must be greater than zero".to_string(),
            ));
        }
        options.prompt_config.page_size = page_size;
        Ok(())
    })
}

/// Ask each question in order and write the answers into `answers` under the
/// question names.
///
/// Rejected answers are reported through the prompt and asked again until
/// every validator accepts them. Any other error aborts the remaining
/// questions and is returned as is.
///
/// ```rust,ignore
/// let mut questions = vec![
///     Question::new("color", Select::new("Choose a color:", ["red", "blue", "green"])),
///     Question::new("name", Input::new("Name:")).with_validator(survey::validate::required),
/// ];
/// let mut answers = Answers::new();
/// survey::ask(&mut questions, &mut answers, [])?;
/// ```
pub fn ask(
    questions: &mut [Question],
    answers: &mut dyn AnswerSink,
    opts: impl IntoIterator<Item = AskOpt>,
) -> Result<(), SurveyError> {
    let options = AskOptions::build(opts)?;

    for question in questions.iter_mut() {
        let (name, prompt, validate, transform) = question.parts_mut();
        let answer = ask_question(name, prompt, validate, transform, &options)?;
        answers.write_answer(name, answer)?;
    }

    Ok(())
}

/// Ask a single, unnamed question and write the answer into `response`.
///
/// `response` is usually a plain value such as a `String` or `bool`.
pub fn ask_one(
    prompt: &mut dyn Prompt,
    response: &mut dyn AnswerSink,
    opts: impl IntoIterator<Item = AskOpt>,
) -> Result<(), SurveyError> {
    let options = AskOptions::build(opts)?;
    let answer = ask_question("", prompt, None, None, &options)?;
    response.write_answer("", answer)?;
    Ok(())
}

fn ask_question(
    name: &str,
    prompt: &mut dyn Prompt,
    validate: Option<&Validator>,
    transform: Option<&Transformer>,
    options: &AskOptions,
) -> Result<Answer, SurveyError> {
    if let Some(receiver) = prompt.as_wants_stdio() {
        receiver.with_stdio(options.stdio.clone());
    }

    let config = &options.prompt_config;
    tracing::debug!(question = name, "asking");
    let mut answer = prompt.prompt(config)?;

    let chain: Vec<&Validator> = validate.into_iter().chain(&options.validators).collect();
    'validation: loop {
        for validate in &chain {
            if let Err(message) = validate(&answer) {
                tracing::debug!(question = name, %message, "answer rejected");
                prompt.error(&message)?;
                answer = match prompt.as_prompt_again() {
                    Some(again) => again.prompt_again(config, &answer, &message)?,
                    None => prompt.prompt(config)?,
                };
                continue 'validation;
            }
        }
        break;
    }

    if let Some(replacement) = transform.and_then(|transform| transform(&answer)) {
        answer = replacement;
    }

    if let Err(err) = prompt.cleanup(config, &answer) {
        tracing::warn!(question = name, error = %err, "cleanup failed");
    }

    Ok(answer)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};
    use std::rc::Rc;

    use survey_types::{AnswerError, Answers, PromptAgain, WantsStdio};

    use super::*;
    use crate::testing::scripted_stdio;

    #[derive(Debug, Default)]
    struct Calls {
        prompts: usize,
        again: Vec<(Answer, String)>,
        errors: Vec<String>,
        cleanups: Vec<Answer>,
        stdio_injected: bool,
    }

    /// Answers from a fixed list, recording how the loop drives it.
    struct Canned {
        answers: VecDeque<Answer>,
        calls: Rc<RefCell<Calls>>,
        prompt_again: bool,
        fail_cleanup: bool,
    }

    impl Canned {
        fn new<I, A>(answers: I) -> (Self, Rc<RefCell<Calls>>)
        where
            I: IntoIterator<Item = A>,
            A: Into<Answer>,
        {
            let calls = Rc::new(RefCell::new(Calls::default()));
            let canned = Self {
                answers: answers.into_iter().map(Into::into).collect(),
                calls: calls.clone(),
                prompt_again: false,
                fail_cleanup: false,
            };
            (canned, calls)
        }

        fn next(&mut self) -> Result<Answer, SurveyError> {
            self.answers.pop_front().ok_or(SurveyError::Interrupted)
        }
    }

    impl Prompt for Canned {
        fn prompt(&mut self, _config: &PromptConfig) -> Result<Answer, SurveyError> {
            self.calls.borrow_mut().prompts += 1;
            self.next()
        }

        fn cleanup(&mut self, _config: &PromptConfig, answer: &Answer) -> Result<(), SurveyError> {
            self.calls.borrow_mut().cleanups.push(answer.clone());
            if self.fail_cleanup {
                return Err(SurveyError::backend(anyhow::anyhow!("terminal gone")));
            }
            Ok(())
        }

        fn error(&mut self, message: &str) -> Result<(), SurveyError> {
            self.calls.borrow_mut().errors.push(message.to_string());
            Ok(())
        }

        fn as_prompt_again(&mut self) -> Option<&mut dyn PromptAgain> {
            if self.prompt_again { Some(self) } else { None }
        }

        fn as_wants_stdio(&mut self) -> Option<&mut dyn WantsStdio> {
            Some(self)
        }
    }

    impl PromptAgain for Canned {
        fn prompt_again(
            &mut self,
            _config: &PromptConfig,
            invalid: &Answer,
            message: &str,
        ) -> Result<Answer, SurveyError> {
            self.calls
                .borrow_mut()
                .again
                .push((invalid.clone(), message.to_string()));
            self.next()
        }
    }

    impl WantsStdio for Canned {
        fn with_stdio(&mut self, _stdio: Stdio) {
            self.calls.borrow_mut().stdio_injected = true;
        }
    }

    fn quiet() -> AskOpt {
        with_stdio(scripted_stdio(Vec::new()).0)
    }

    fn reject(text: &'static str) -> impl Fn(&Answer) -> Result<(), String> {
        move |answer| {
            if answer.as_str() == Some(text) {
                Err(format!("{text} is not allowed"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn reprompts_exactly_k_times() {
        for k in 0..5 {
            let rejected = (0..k).map(|i| format!("bad {i}"));
            let (canned, calls) = Canned::new(rejected.chain(["good".to_string()]));
            let mut questions = vec![Question::new("q", canned).with_validator(|answer| {
                match answer.as_str() {
                    Some(text) if text.starts_with("bad") => Err("bad answer".to_string()),
                    _ => Ok(()),
                }
            })];
            let mut answers = Answers::new();

            ask(&mut questions, &mut answers, [quiet()]).unwrap();

            let calls = calls.borrow();
            assert_eq!(calls.prompts, k + 1);
            assert_eq!(calls.errors.len(), k);
            assert_eq!(answers.get_text("q").unwrap(), "good");
        }
    }

    #[test]
    fn whole_chain_is_rechecked_after_a_rejection() {
        let (canned, calls) = Canned::new(["b", "a", "c"]);
        let mut questions = vec![Question::new("q", canned).with_validator(reject("a"))];
        let mut answers = Answers::new();

        ask(
            &mut questions,
            &mut answers,
            [quiet(), with_validator(reject("b"))],
        )
        .unwrap();

        let calls = calls.borrow();
        assert_eq!(calls.prompts, 3);
        assert_eq!(calls.errors, vec!["b is not allowed", "a is not allowed"]);
        assert_eq!(answers.get_text("q").unwrap(), "c");
    }

    #[test]
    fn question_validator_runs_before_global_ones() {
        let (canned, calls) = Canned::new(["x", "ok"]);
        let mut questions = vec![Question::new("q", canned).with_validator(reject("x"))];

        ask(
            &mut questions,
            &mut Answers::new(),
            [
                quiet(),
                with_validator(|_| Err("global".to_string())),
                with_validator(|answer| {
                    if answer.as_str() == Some("x") {
                        Err("second global".to_string())
                    } else {
                        Ok(())
                    }
                }),
            ],
        )
        .unwrap_err();

        assert_eq!(calls.borrow().errors[0], "x is not allowed");
        assert_eq!(calls.borrow().errors[1], "global");
    }

    #[test]
    fn prompt_again_is_preferred() {
        let (mut canned, calls) = Canned::new(["short", "long enough"]);
        canned.prompt_again = true;
        let mut questions =
            vec![Question::new("q", canned).with_validator(crate::validate::min_length(6))];

        ask(&mut questions, &mut Answers::new(), [quiet()]).unwrap();

        let calls = calls.borrow();
        assert_eq!(calls.prompts, 1);
        assert_eq!(
            calls.again,
            vec![(
                Answer::Text("short".into()),
                "value is too short. Min length is 6".to_string()
            )]
        );
    }

    #[test]
    fn transform_replaces_only_when_it_returns_some() {
        let (upper, _) = Canned::new(["Red"]);
        let (keep, _) = Canned::new(["Blue"]);
        let mut questions = vec![
            Question::new("upper", upper).with_transform(crate::transform::to_lower),
            Question::new("keep", keep).with_transform(|_| None),
        ];
        let mut answers = Answers::new();

        ask(&mut questions, &mut answers, [quiet()]).unwrap();

        assert_eq!(answers.get_text("upper").unwrap(), "red");
        assert_eq!(answers.get_text("keep").unwrap(), "Blue");
    }

    #[test]
    fn cleanup_sees_the_transformed_answer_and_may_fail() {
        let (mut canned, calls) = Canned::new(["Red"]);
        canned.fail_cleanup = true;
        let mut questions =
            vec![Question::new("color", canned).with_transform(crate::transform::to_lower)];
        let mut answers: HashMap<String, Answer> = HashMap::new();

        ask(&mut questions, &mut answers, [quiet()]).unwrap();

        assert_eq!(calls.borrow().cleanups, vec![Answer::Text("red".into())]);
        assert_eq!(answers.get("color"), Some(&Answer::Text("red".into())));
    }

    #[test]
    fn prompt_error_aborts_remaining_questions() {
        let (first, _) = Canned::new(Vec::<Answer>::new());
        let (second, second_calls) = Canned::new(["never"]);
        let mut questions = vec![Question::new("a", first), Question::new("b", second)];
        let mut answers = Answers::new();

        let err = ask(&mut questions, &mut answers, [quiet()]).unwrap_err();

        assert!(err.is_interrupted());
        assert_eq!(second_calls.borrow().prompts, 0);
        assert!(answers.is_empty());
    }

    #[test]
    fn option_error_happens_before_any_prompt() {
        let (canned, calls) = Canned::new(["a"]);
        let mut questions = vec![Question::new("q", canned)];

        let err = ask(
            &mut questions,
            &mut Answers::new(),
            [quiet(), with_page_size(0)],
        )
        .unwrap_err();

        assert!(matches!(err, SurveyError::InvalidOption(_)));
        assert_eq!(calls.borrow().prompts, 0);
    }

    #[test]
    fn later_options_win() {
        let options = AskOptions::build([with_page_size(3), with_page_size(12)]).unwrap();
        assert_eq!(options.prompt_config.page_size, 12);
        assert_eq!(
            AskOptions::build(Vec::new()).unwrap().prompt_config.page_size,
            DEFAULT_PAGE_SIZE
        );
    }

    #[test]
    fn sink_errors_propagate() {
        struct Refuses;
        impl AnswerSink for Refuses {
            fn write_answer(&mut self, name: &str, _answer: Answer) -> Result<(), AnswerError> {
                Err(AnswerError::UnknownField(name.to_string()))
            }
        }

        let (canned, _) = Canned::new(["a"]);
        let err = ask(&mut [Question::new("q", canned)], &mut Refuses, [quiet()]).unwrap_err();
        assert!(matches!(err, SurveyError::Answer(AnswerError::UnknownField(ref name)) if name == "q"));
    }

    #[test]
    fn stdio_is_injected() {
        let (canned, calls) = Canned::new(["a"]);
        ask(&mut [Question::new("q", canned)], &mut Answers::new(), [quiet()]).unwrap();
        assert!(calls.borrow().stdio_injected);
    }

    #[test]
    fn ask_one_writes_the_single_answer() {
        let (mut canned, _) = Canned::new([true]);
        let mut ok = false;
        ask_one(&mut canned, &mut ok, [quiet()]).unwrap();
        assert!(ok);
    }
}
