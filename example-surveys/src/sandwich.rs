//! Sandwich order collected into a plain `Answers` map.

use survey::{AnswerError, Answers, Confirm, Input, Question, Select, transform, validate};

pub const BREADS: [&str; 5] = ["Italian", "Wheat", "Honey Oat", "Flatbread", "Wrap"];

pub const FILLINGS: [&str; 8] = [
    "Turkey",
    "Ham",
    "Roast Beef",
    "Tuna",
    "Meatball",
    "Veggie Patty",
    "Chicken Teriyaki",
    "Egg Salad",
];

pub fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "bread",
            Select::new("Pick your bread:", BREADS)
                .with_default("Wheat")
                .with_help("Baked fresh every morning"),
        ),
        Question::new(
            "filling",
            Select::new("Pick a filling:", FILLINGS)
                .with_page_size(4)
                .with_vim_mode(true),
        ),
        Question::new("toasted", Confirm::new("Toasted?").with_default(true)),
        Question::new("notes", Input::new("Anything else?").with_default("nothing"))
            .with_validator(validate::max_length(40))
            .with_transform(transform::to_lower),
    ]
}

/// One line describing a completed order.
pub fn order_summary(answers: &Answers) -> Result<String, AnswerError> {
    let toasted = if answers.get_bool("toasted")? {
        "toasted "
    } else {
        ""
    };
    Ok(format!(
        "{} on {}{}, notes: {}",
        answers.get_text("filling")?,
        toasted,
        answers.get_text("bread")?,
        answers.get_text("notes")?,
    ))
}
