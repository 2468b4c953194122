//! Identifier derivation for generated class names.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

/// Case variants of one class name, as used throughout generated text.
///
/// All three forms are whole-string folds of the same input: `JobQueue`
/// becomes `jobqueue` and `JOBQUEUE`, never `job_queue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifiers {
    /// The name exactly as given
    pub pascal: String,
    /// Lowercase form, used for file names
    pub lower: String,
    /// Uppercase form, used for include guards
    pub upper: String,
}

impl Identifiers {
    /// Derives the case variants without any validation.
    pub fn derive(name: &str) -> Self {
        Self {
            pascal: name.to_string(),
            lower: name.to_lowercase(),
            upper: name.to_uppercase(),
        }
    }

    /// Validates `name` and derives its case variants.
    ///
    /// # Errors
    /// * `Error::ValidationError` if `name` is not a C++ identifier
    pub fn parse(name: &str) -> Result<Self> {
        validate_identifier(name)?;
        Ok(Self::derive(name))
    }
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
    })
}

/// Checks that `name` can be used as a class name in generated code.
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::ValidationError("class name must not be empty".to_string()));
    }
    if !identifier_pattern().is_match(name) {
        return Err(Error::ValidationError(format!(
            "'{name}' is not a valid identifier (expected letters, digits and underscores, \
             not starting with a digit)"
        )));
    }
    Ok(())
}
