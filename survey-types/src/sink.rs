use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::{Answer, AnswerError, Answers, FromAnswer};

/// Destination for named answers.
///
/// The ask loop writes every accepted answer into a sink under the question's
/// name. Structs implement this with `#[derive(AnswerSink)]`; maps store
/// answers by key; plain values (`String`, `bool`, ...) accept the single
/// answer of an `ask_one` call regardless of its name.
pub trait AnswerSink {
    /// Store `answer` under `name`.
    fn write_answer(&mut self, name: &str, answer: Answer) -> Result<(), AnswerError>;
}

impl AnswerSink for Answers {
    fn write_answer(&mut self, name: &str, answer: Answer) -> Result<(), AnswerError> {
        self.insert(name, answer);
        Ok(())
    }
}

impl<S: BuildHasher> AnswerSink for HashMap<String, Answer, S> {
    fn write_answer(&mut self, name: &str, answer: Answer) -> Result<(), AnswerError> {
        self.insert(name.to_string(), answer);
        Ok(())
    }
}

macro_rules! single_value_sink {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AnswerSink for $ty {
                fn write_answer(&mut self, name: &str, answer: Answer) -> Result<(), AnswerError> {
                    *self = <$ty as FromAnswer>::from_answer(name, answer)?;
                    Ok(())
                }
            }
        )*
    };
}

single_value_sink!(String, bool, usize, i64, f64, Vec<String>, Answer);
