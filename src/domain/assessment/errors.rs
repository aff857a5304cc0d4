//! Assessment-specific error types.

use crate::domain::foundation::ValidationError;

/// Errors raised while handling an assessment.
///
/// Classification itself is total; only input validation can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// An answer was missing or blank.
    Validation(ValidationError),
}

impl AssessmentError {
    pub fn validation(error: ValidationError) -> Self {
        AssessmentError::Validation(error)
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            AssessmentError::Validation(_) => "VALIDATION_FAILED",
        }
    }

    /// Field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            AssessmentError::Validation(err) => err.field(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            AssessmentError::Validation(err) => err.to_string(),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_exposes_field_and_code() {
        let err: AssessmentError = ValidationError::empty_field("previousHelp").into();

        assert_eq!(err.code(), "VALIDATION_FAILED");
        assert_eq!(err.field(), "previousHelp");
        assert_eq!(err.to_string(), "Field 'previousHelp' cannot be empty");
    }
}
