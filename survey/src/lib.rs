//! # survey
//!
//! Ask questions on the terminal. Select, input and confirm prompts with
//! validation, re-prompting and answer transforms.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use survey::{AnswerSink, Confirm, Input, Question, Select, ask};
//!
//! #[derive(AnswerSink, Default, Debug)]
//! struct Order {
//!     #[survey("sandwich")]
//!     bread: String,
//!     name: String,
//!     toasted: bool,
//! }
//!
//! let mut questions = vec![
//!     Question::new("sandwich", Select::new("Bread:", ["rye", "sourdough", "white"])),
//!     Question::new("name", Input::new("Name for the order:"))
//!         .with_validator(survey::validate::required)
//!         .with_transform(survey::transform::title),
//!     Question::new("toasted", Confirm::new("Toasted?").with_default(true)),
//! ];
//!
//! let mut order = Order::default();
//! ask(&mut questions, &mut order, [])?;
//! ```
//!
//! ## Answer sinks
//!
//! Answers are written by question name into any `AnswerSink`:
//! - `Answers` or `HashMap<String, Answer>` - keyed by name
//! - Structs with `#[derive(AnswerSink)]` - by `#[survey("...")]` tag, then by field name
//! - Plain values (`String`, `bool`, ...) - for `ask_one`
//!
//! ## Testing
//!
//! `testing::scripted_stdio` replays a key script and records every frame,
//! so surveys can be exercised without a terminal.

pub use survey_types::*;

pub use survey_macro::AnswerSink;

mod ask;
pub use ask::{
    AskOpt, AskOptions, DEFAULT_PAGE_SIZE, ask, ask_one, with_page_size, with_stdio,
    with_validator,
};

mod paginate;
pub use paginate::paginate;

mod filter;
pub use filter::{Filter, default_filter};

mod line;

mod select;
pub use select::Select;

mod input;
pub use input::Input;

mod confirm;
pub use confirm::Confirm;

pub mod terminal;
pub mod testing;
pub mod transform;
pub mod validate;
