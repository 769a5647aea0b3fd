//! Validation traits and types for configuration sections.
//!
//! A configuration section reports every problem it finds as a list, so a
//! caller validating many sections can merge them into one report.

use std::fmt;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field or path that failed validation.
    pub field: String,
    /// A human-readable description of the validation failure.
    pub message: String,
    /// The kind of validation that failed.
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    /// Creates a validation error for a required field that is missing.
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            message: format!("'{field}' is required but was not provided"),
            field,
            kind: ValidationErrorKind::Required,
        }
    }

    /// Creates a validation error for an invalid format.
    ///
    /// # Examples
    ///
    /// ```
    /// use clusterimages_core::ValidationError;
    /// use clusterimages_core::validation::ValidationErrorKind;
    ///
    /// let error = ValidationError::format("coredns.version", "must not contain whitespace");
    /// assert_eq!(error.kind, ValidationErrorKind::Format);
    /// ```
    pub fn format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind: ValidationErrorKind::Format,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The category of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A required field was not provided.
    Required,
    /// The value format is invalid.
    Format,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Format => write!(f, "format"),
        }
    }
}

/// An ordered list of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty validation errors collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a validation error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are no validation errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of validation errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns an iterator over the validation errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Converts to a Result, returning `Ok(())` if no errors, or `Err` with the whole list.
    ///
    /// # Errors
    ///
    /// Returns `self` if the collection is not empty.
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Merges another `ValidationErrors` into this one.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = ValidationError>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "no validation errors")
        } else if self.errors.len() == 1 {
            write!(f, "{}", self.errors[0])
        } else {
            writeln!(f, "{} validation errors:", self.errors.len())?;
            for error in &self.errors {
                writeln!(f, "  - {error}")?;
            }
            Ok(())
        }
    }
}

impl std::error::Error for ValidationErrors {}

/// Trait for configuration sections that can be validated.
///
/// # Examples
///
/// ```
/// use clusterimages_core::validation::{Validate, ValidationError, ValidationErrors};
///
/// struct Mirror(String);
///
/// impl Validate for Mirror {
///     fn validate(&self) -> ValidationErrors {
///         let mut errors = ValidationErrors::new();
///         if self.0.is_empty() {
///             errors.add(ValidationError::required("mirror"));
///         }
///         errors
///     }
/// }
///
/// assert!(Mirror("reg.local".into()).is_valid());
/// assert!(!Mirror(String::new()).is_valid());
/// ```
pub trait Validate {
    /// Validates this instance and returns every error found.
    ///
    /// An empty list means the instance is valid.
    fn validate(&self) -> ValidationErrors;

    /// Returns true if [`Validate::validate`] reports no errors.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_required() {
        let error = ValidationError::required("coredns.image");
        assert_eq!(error.field, "coredns.image");
        assert_eq!(error.kind, ValidationErrorKind::Required);
        assert!(error.message.contains("required"));
    }

    #[test]
    fn test_validation_error_format() {
        let error = ValidationError::format("kubeproxy.version", "must not be blank");
        assert_eq!(error.kind, ValidationErrorKind::Format);
        assert_eq!(error.message, "must not be blank");
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::format("calico.cni.image", "invalid format");
        let display = format!("{error}");
        assert!(display.contains("calico.cni.image"));
        assert!(display.contains("invalid format"));
    }

    #[test]
    fn test_validation_errors_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::required("field"));
        let result = errors.into_result();
        assert_eq!(result.unwrap_err().len(), 1);
    }

    #[test]
    fn test_validation_errors_merge_keeps_order() {
        let mut first = ValidationErrors::new();
        first.add(ValidationError::required("a"));

        let second: ValidationErrors = vec![ValidationError::required("b")].into_iter().collect();
        first.merge(second);

        let fields: Vec<_> = first.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn test_validation_errors_display() {
        assert!(format!("{}", ValidationErrors::new()).contains("no validation errors"));

        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::required("field1"));
        assert!(!format!("{errors}").contains("validation errors:"));

        errors.add(ValidationError::format("field2", "bad"));
        let display = format!("{errors}");
        assert!(display.contains("2 validation errors"));
        assert!(display.contains("field2"));
    }

    #[test]
    fn test_validation_error_kind_display() {
        assert_eq!(ValidationErrorKind::Required.to_string(), "required");
        assert_eq!(ValidationErrorKind::Format.to_string(), "format");
    }
}
