use thiserror::Error;

/// Errors raised by the path helpers
///
/// Unclassifiable input is not an error: the classifier reports it as
/// [`crate::PathFormat::Unknown`] and callers branch on that value.
#[derive(Error, Debug)]
pub enum PathError {
	#[error("Required argument is absent: {argument}")]
	ArgumentAbsent { argument: String },

	#[error("Invalid path rules configuration: {parameter} - {reason}")]
	InvalidConfiguration { parameter: String, reason: String },

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON serialization error: {0}")]
	Json(#[from] serde_json::Error),
}

impl PathError {
	/// Check if this error was caused by a missing argument
	pub fn is_argument_absent(&self) -> bool {
		matches!(self, PathError::ArgumentAbsent { .. })
	}

	/// Check if this error is related to configuration issues
	pub fn is_configuration_error(&self) -> bool {
		matches!(
			self,
			PathError::InvalidConfiguration { .. } | PathError::Json(_)
		)
	}

	/// Get error category for logging
	pub fn category(&self) -> &'static str {
		match self {
			PathError::ArgumentAbsent { .. } => "argument",
			PathError::InvalidConfiguration { .. } => "configuration",
			PathError::Io(_) => "io",
			PathError::Json(_) => "serialization",
		}
	}

	/// Create an argument absent error for the named parameter
	pub fn argument_absent(argument: &str) -> Self {
		PathError::ArgumentAbsent { argument: argument.to_string() }
	}

	/// Create a configuration error
	pub fn invalid_configuration(parameter: &str, reason: &str) -> Self {
		PathError::InvalidConfiguration {
			parameter: parameter.to_string(),
			reason: reason.to_string(),
		}
	}
}

/// Unwrap an optional string argument, reporting its name when absent
pub(crate) fn require<'a>(value: Option<&'a str>, argument: &str) -> Result<&'a str> {
	value.ok_or_else(|| PathError::argument_absent(argument))
}

pub type Result<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
	use super::*;
	use std::io;

	#[test]
	fn test_error_variants() {
		let absent = PathError::argument_absent("path");
		let config = PathError::invalid_configuration("legacy_max_path", "must be positive");

		assert!(absent.to_string().contains("absent: path"));
		assert!(config.to_string().contains("legacy_max_path"));
	}

	#[test]
	fn test_from_conversions() {
		let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
		let path_err: PathError = io_err.into();

		match path_err {
			PathError::Io(_) => (),
			_ => panic!("Expected IO error variant"),
		}
	}

	#[test]
	fn test_error_categorization() {
		let absent = PathError::argument_absent("a");
		assert!(absent.is_argument_absent());
		assert!(!absent.is_configuration_error());
		assert_eq!(absent.category(), "argument");

		let config = PathError::invalid_configuration("legacy_max_path", "zero");
		assert!(config.is_configuration_error());
		assert_eq!(config.category(), "configuration");
	}

	#[test]
	fn test_require() {
		assert_eq!(require(Some("x"), "a").unwrap(), "x");
		let err = require(None, "b").unwrap_err();
		assert!(matches!(err, PathError::ArgumentAbsent { ref argument } if argument == "b"));
	}
}
