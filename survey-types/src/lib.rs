//! Core types for the survey crate.
//!
//! This crate provides the vocabulary shared by prompts, the ask loop and
//! terminal backends:
//! - `Answer`, `Answers` and `AnswerSink` - Values produced by prompts and where they go
//! - `Question`, `Validator` and `Transformer` - One step of a survey
//! - `Prompt`, `PromptAgain` and `WantsStdio` - Capabilities a widget can offer
//! - `Key`, `Frame`, `KeySource`, `Renderer` and `Stdio` - The terminal seam

mod answer;
pub use answer::{Answer, FromAnswer};

mod answers;
pub use answers::{AnswerError, Answers};

mod sink;
pub use sink::AnswerSink;

mod key;
pub use key::{HELP_INPUT, Key};

mod frame;
pub use frame::{ConfirmFrame, Frame, InputFrame, SelectFrame};

mod stdio;
pub use stdio::{HiddenCursor, RawMode, Stdio};

mod question;
pub use question::{PromptConfig, Question, Transformer, Validator};

mod error;
pub use error::SurveyError;

mod traits;
pub use traits::{KeySource, Prompt, PromptAgain, Renderer, WantsStdio};
