//! Field validation rules: name, description, shared outcome type

mod check;
mod description;
mod name;

pub use check::CheckOutcome;
pub use description::{MAX_DESCRIPTION_LENGTH, check_description};
pub use name::{MAX_NAME_LENGTH, check_name};
