use thiserror::Error;

/// Validation errors for domain model fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("dex number cannot be empty")]
    EmptyDexNumber,
    #[error("dex number must be a whole number: {0}")]
    MalformedDexNumber(String),
    #[error("dex number must be positive: {0}")]
    NonPositiveDexNumber(i64),
}

/// Validates an entry name: any non-empty text is accepted.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(())
    }
}

/// Parses a dex number from user input: a positive whole number.
///
/// Surrounding whitespace is ignored. Returns the parsed value so callers can
/// store its canonical decimal form (`"007"` parses to `7`).
pub fn parse_dex_number(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDexNumber);
    }
    let number: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::MalformedDexNumber(raw.to_string()))?;
    if number <= 0 {
        return Err(ValidationError::NonPositiveDexNumber(number));
    }
    Ok(number)
}
