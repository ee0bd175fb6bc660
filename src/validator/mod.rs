//! Name validation
//!
//! Composable predicates applied to user, folder and file names before any
//! record is created.

mod rules;

pub use rules::{LengthValidator, NameValidator, PatternValidator, Validator};
