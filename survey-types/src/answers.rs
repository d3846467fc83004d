use std::collections::HashMap;

use crate::Answer;

/// Error type for writing and reading named answers.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("No field or key named '{0}' to receive the answer")]
    UnknownField(String),

    #[error("Missing answer for question: {0}")]
    MissingAnswer(String),

    #[error("Type mismatch for '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Cannot parse '{value}' as {expected} for '{name}'")]
    Parse {
        name: String,
        value: String,
        expected: &'static str,
    },
}

/// Answers collected from a survey, keyed by question name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<String, Answer>,
}

impl Answers {
    /// Create a new empty answers collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer under the given question name.
    pub fn insert(&mut self, name: impl Into<String>, answer: impl Into<Answer>) {
        self.values.insert(name.into(), answer.into());
    }

    /// Get the answer for a question.
    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.values.get(name)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, name: &str) -> Option<Answer> {
        self.values.remove(name)
    }

    /// Get an iterator over all name-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Answer)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a text answer.
    pub fn get_text(&self, name: &str) -> Result<&str, AnswerError> {
        match self.get(name) {
            Some(Answer::Text(s)) => Ok(s),
            Some(other) => Err(self.mismatch(name, "Text", other)),
            None => Err(AnswerError::MissingAnswer(name.to_string())),
        }
    }

    /// Get a boolean answer.
    pub fn get_bool(&self, name: &str) -> Result<bool, AnswerError> {
        match self.get(name) {
            Some(Answer::Bool(b)) => Ok(*b),
            Some(other) => Err(self.mismatch(name, "Bool", other)),
            None => Err(AnswerError::MissingAnswer(name.to_string())),
        }
    }

    /// Get an index answer.
    pub fn get_index(&self, name: &str) -> Result<usize, AnswerError> {
        match self.get(name) {
            Some(Answer::Index(i)) => Ok(*i),
            Some(other) => Err(self.mismatch(name, "Index", other)),
            None => Err(AnswerError::MissingAnswer(name.to_string())),
        }
    }

    /// Get a list answer.
    pub fn get_list(&self, name: &str) -> Result<&[String], AnswerError> {
        match self.get(name) {
            Some(Answer::List(items)) => Ok(items),
            Some(other) => Err(self.mismatch(name, "List", other)),
            None => Err(AnswerError::MissingAnswer(name.to_string())),
        }
    }

    fn mismatch(&self, name: &str, expected: &'static str, actual: &Answer) -> AnswerError {
        AnswerError::TypeMismatch {
            name: name.to_string(),
            expected,
            actual: actual.type_name(),
        }
    }
}

impl IntoIterator for Answers {
    type Item = (String, Answer);
    type IntoIter = std::collections::hash_map::IntoIter<String, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a String, &'a Answer);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Answer>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
