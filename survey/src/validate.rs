//! Stock validators for `Question::with_validator` and `with_validator`.

use survey_types::{Answer, Validator};

/// Rejects empty text and empty lists.
///
/// Booleans and indices always carry a value and pass.
pub fn required(answer: &Answer) -> Result<(), String> {
    let empty = match answer {
        Answer::Text(s) => s.is_empty(),
        Answer::List(items) => items.is_empty(),
        Answer::Bool(_) | Answer::Index(_) => false,
    };
    if empty {
        Err("Value is required".to_string())
    } else {
        Ok(())
    }
}

/// Rejects text answers longer than `max` characters.
pub fn max_length(max: usize) -> impl Fn(&Answer) -> Result<(), String> {
    move |answer| match answer {
        Answer::Text(s) if s.chars().count() > max => {
            Err(format!("value is too long. Max length is {max}"))
        }
        _ => Ok(()),
    }
}

/// Rejects text answers shorter than `min` characters.
pub fn min_length(min: usize) -> impl Fn(&Answer) -> Result<(), String> {
    move |answer| match answer {
        Answer::Text(s) if s.chars().count() < min => {
            Err(format!("value is too short. Min length is {min}"))
        }
        _ => Ok(()),
    }
}

/// Rejects list answers with more than `max` items.
pub fn max_items(max: usize) -> impl Fn(&Answer) -> Result<(), String> {
    move |answer| match answer {
        Answer::List(items) if items.len() > max => {
            Err(format!("value has too many items. Max items is {max}"))
        }
        _ => Ok(()),
    }
}

/// Rejects list answers with fewer than `min` items.
pub fn min_items(min: usize) -> impl Fn(&Answer) -> Result<(), String> {
    move |answer| match answer {
        Answer::List(items) if items.len() < min => {
            Err(format!("value has too few items. Min items is {min}"))
        }
        _ => Ok(()),
    }
}

/// Runs `validators` in order and reports the first failure.
pub fn compose_validators(validators: Vec<Validator>) -> impl Fn(&Answer) -> Result<(), String> {
    move |answer| validators.iter().try_for_each(|validate| validate(answer))
}
