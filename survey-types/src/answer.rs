use std::fmt;

use crate::AnswerError;

/// A single answer produced by a prompt.
///
/// This is the value that flows through validation and transformation
/// before being written into an `AnswerSink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Free text or the chosen option of a select prompt.
    Text(String),

    /// A yes/no confirmation.
    Bool(bool),

    /// A position in a list of options.
    Index(usize),

    /// Several text values (multi-value answers).
    List(Vec<String>),
}

impl Answer {
    /// Try to get this answer as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this answer as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this answer as an index.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this answer as a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the type name of this answer for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Bool(_) => "Bool",
            Self::Index(_) => "Index",
            Self::List(_) => "List",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bool(true) => f.write_str("Yes"),
            Self::Bool(false) => f.write_str("No"),
            Self::Index(i) => write!(f, "{i}"),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for Answer {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<usize> for Answer {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl From<Vec<String>> for Answer {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Conversion from an `Answer` into the type of a sink field.
///
/// `name` is the question name and only used for error reporting.
pub trait FromAnswer: Sized {
    fn from_answer(name: &str, answer: Answer) -> Result<Self, AnswerError>;
}

fn mismatch(name: &str, expected: &'static str, answer: &Answer) -> AnswerError {
    AnswerError::TypeMismatch {
        name: name.to_string(),
        expected,
        actual: answer.type_name(),
    }
}

fn parse<T: std::str::FromStr>(
    name: &str,
    text: &str,
    expected: &'static str,
) -> Result<T, AnswerError> {
    text.trim().parse().map_err(|_| AnswerError::Parse {
        name: name.to_string(),
        value: text.to_string(),
        expected,
    })
}

impl FromAnswer for Answer {
    fn from_answer(_name: &str, answer: Answer) -> Result<Self, AnswerError> {
        Ok(answer)
    }
}

impl FromAnswer for String {
    fn from_answer(name: &str, answer: Answer) -> Result<Self, AnswerError> {
        match answer {
            Answer::Text(s) => Ok(s),
            other => Err(mismatch(name, "Text", &other)),
        }
    }
}

impl FromAnswer for bool {
    fn from_answer(name: &str, answer: Answer) -> Result<Self, AnswerError> {
        match answer {
            Answer::Bool(b) => Ok(b),
            Answer::Text(s) => parse(name, &s, "bool"),
            other => Err(mismatch(name, "Bool", &other)),
        }
    }
}

impl FromAnswer for usize {
    fn from_answer(name: &str, answer: Answer) -> Result<Self, AnswerError> {
        match answer {
            Answer::Index(i) => Ok(i),
            Answer::Text(s) => parse(name, &s, "usize"),
            other => Err(mismatch(name, "Index", &other)),
        }
    }
}

impl FromAnswer for i64 {
    fn from_answer(name: &str, answer: Answer) -> Result<Self, AnswerError> {
        match answer {
            Answer::Text(s) => parse(name, &s, "i64"),
            Answer::Index(i) => i64::try_from(i).map_err(|_| AnswerError::Parse {
                name: name.to_string(),
                value: i.to_string(),
                expected: "i64",
            }),
            other => Err(mismatch(name, "Text", &other)),
        }
    }
}

impl FromAnswer for f64 {
    fn from_answer(name: &str, answer: Answer) -> Result<Self, AnswerError> {
        match answer {
            Answer::Text(s) => parse(name, &s, "f64"),
            other => Err(mismatch(name, "Text", &other)),
        }
    }
}

impl FromAnswer for Vec<String> {
    fn from_answer(name: &str, answer: Answer) -> Result<Self, AnswerError> {
        match answer {
            Answer::List(items) => Ok(items),
            Answer::Text(s) => Ok(vec![s]),
            other => Err(mismatch(name, "List", &other)),
        }
    }
}

impl<T: FromAnswer> FromAnswer for Option<T> {
    fn from_answer(name: &str, answer: Answer) -> Result<Self, AnswerError> {
        T::from_answer(name, answer).map(Some)
    }
}
