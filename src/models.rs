// src/models.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The three password generation policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMethod {
    /// Uppercase, digit and special character guaranteed; rest from all classes.
    Simple,
    /// Only caller-selected character classes, one of each guaranteed.
    Selective,
    /// Caller-supplied literal characters guaranteed; rest from all classes.
    Required,
}

/// Literal characters that must appear in a generated password, grouped by
/// the character class the form collects them under. An empty string means
/// no requirement for that class.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RequiredChars {
    #[serde(default)]
    pub uppercase: String,
    #[serde(default)]
    pub lowercase: String,
    #[serde(default)]
    pub digits: String,
    #[serde(default)]
    pub special: String,
}

impl RequiredChars {
    /// All required characters across the four classes, in field order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.uppercase
            .chars()
            .chain(self.lowercase.chars())
            .chain(self.digits.chars())
            .chain(self.special.chars())
    }

    pub fn total(&self) -> usize {
        self.chars().count()
    }
}
