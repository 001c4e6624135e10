/// Invariant violations raised by entity constructors and mutators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("{0} is required.")]
    BlankField(&'static str),

    #[error("{field} must be at most {max} characters.")]
    TooLong { field: &'static str, max: usize },

    #[error("Duration must be positive.")]
    NonPositiveDuration,
}

/// Trims `value` and rejects it when nothing is left.
pub fn require_text(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::BlankField(field));
    }
    Ok(trimmed.to_string())
}

pub fn require_text_max(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, DomainError> {
    let text = require_text(field, value)?;
    if text.chars().count() > max {
        return Err(DomainError::TooLong { field, max });
    }
    Ok(text)
}
