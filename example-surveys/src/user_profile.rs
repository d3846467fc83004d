use survey::{Answer, AnswerSink, Confirm, Input, Question, transform, validate};

/// A simple user profile, filled in by field name.
#[derive(Debug, Default, PartialEq, AnswerSink)]
pub struct UserProfile {
    pub name: String,

    /// Parsed from the typed text.
    pub age: i64,

    #[survey("e-mail")]
    pub email: String,

    pub newsletter: bool,
}

impl UserProfile {
    pub fn questions() -> Vec<Question> {
        vec![
            Question::new("name", Input::new("What is your name?"))
                .with_validator(validate::required)
                .with_transform(transform::title),
            Question::new("age", Input::new("How old are you?")).with_validator(validate_age),
            Question::new(
                "e-mail",
                Input::new("What is your email?").with_help("We never share it"),
            )
            .with_validator(validate_email)
            .with_transform(transform::to_lower),
            Question::new(
                "newsletter",
                Confirm::new("Would you like to receive our newsletter?"),
            ),
        ]
    }
}

pub fn validate_age(answer: &Answer) -> Result<(), String> {
    let text = answer.as_str().unwrap_or_default().trim();
    match text.parse::<i64>() {
        Ok(age) if (0..=150).contains(&age) => Ok(()),
        Ok(_) => Err("age must be between 0 and 150".to_string()),
        Err(_) => Err(format!("{text:?} is not a number")),
    }
}

pub fn validate_email(answer: &Answer) -> Result<(), String> {
    let text = answer.as_str().unwrap_or_default();
    match text.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("that does not look like an email address".to_string()),
    }
}
