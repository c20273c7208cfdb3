//! Value objects for menu records.

use serde::{Deserialize, Serialize};

use super::ValidationReason;

/// Trims `input` and rejects it if nothing is left.
fn non_empty(input: &str) -> Result<String, ValidationReason> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationReason::Empty);
    }
    Ok(trimmed.to_string())
}

/// Name of a dish. Never empty or whitespace only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DishName(String);

impl DishName {
    /// Parses a dish name, trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, ValidationReason> {
        non_empty(input).map(Self)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DishName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DishName {
    type Error = ValidationReason;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DishName> for String {
    fn from(name: DishName) -> Self {
        name.0
    }
}

impl AsRef<str> for DishName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Description of a dish. Never empty or whitespace only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Parses a description, trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, ValidationReason> {
        non_empty(input).map(Self)
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Description {
    type Error = ValidationReason;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Price of a dish.
///
/// Keeps the text exactly as entered (minus surrounding whitespace) for
/// display, alongside the parsed value used for aggregation. The value is
/// always finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    text: String,
    value: f64,
}

impl Price {
    /// Parses a price from free-form text.
    pub fn parse(input: &str) -> Result<Self, ValidationReason> {
        let text = input.trim();
        if text.is_empty() {
            return Err(ValidationReason::Empty);
        }

        let value: f64 = text
            .parse()
            .map_err(|_| ValidationReason::NotANumber(text.to_string()))?;

        if !value.is_finite() {
            return Err(ValidationReason::NotFinite);
        }
        if value < 0.0 {
            return Err(ValidationReason::Negative);
        }

        Ok(Self {
            text: text.to_string(),
            // folds -0 into 0
            value: value + 0.0,
        })
    }

    /// Returns the price text as entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for Price {
    type Error = ValidationReason;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.text
    }
}
