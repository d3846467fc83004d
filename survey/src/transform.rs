//! Stock transformers for `Question::with_transform`.

use survey_types::{Answer, Transformer};

/// Applies `f` to text answers; other answers are left alone.
pub fn transform_string(f: impl Fn(&str) -> String) -> impl Fn(&Answer) -> Option<Answer> {
    move |answer| answer.as_str().map(|s| Answer::Text(f(s)))
}

/// Lower-cases text answers.
pub fn to_lower(answer: &Answer) -> Option<Answer> {
    transform_string(str::to_lowercase)(answer)
}

/// Upper-cases the first letter of every word of a text answer.
pub fn title(answer: &Answer) -> Option<Answer> {
    transform_string(title_case)(answer)
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// Applies `transformers` in order, each seeing the previous result.
pub fn compose_transformers(transformers: Vec<Transformer>) -> impl Fn(&Answer) -> Option<Answer> {
    move |answer| {
        let mut current = answer.clone();
        for transform in &transformers {
            if let Some(next) = transform(&current) {
                current = next;
            }
        }
        Some(current)
    }
}
