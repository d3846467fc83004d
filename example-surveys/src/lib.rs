//! Ready-made question sets, shared by the `survey-demo` binary and the tests.

pub mod sandwich;
pub mod user_profile;

pub use sandwich::{BREADS, FILLINGS, order_summary};
pub use user_profile::{UserProfile, validate_age, validate_email};
