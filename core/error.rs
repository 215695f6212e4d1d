use crate::fields::Field;
use std::fmt;
use thiserror::Error;

pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Every way a submission can fail. The `Display` output is the message shown to the user.
#[derive(Debug, Error)]
pub enum PredictError {
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error("{message}")]
	Http { status: u16, message: String },
	#[error("{}", .0.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
	Transport(Option<String>),
	#[error("{0}")]
	Decode(String),
	#[error("invalid api base url: {0}")]
	Config(String),
}

impl PredictError {
	pub(crate) fn transport(error: &dyn std::error::Error) -> PredictError {
		let message = error.to_string();
		if message.is_empty() {
			PredictError::Transport(None)
		} else {
			PredictError::Transport(Some(message))
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldErrorKind {
	Missing,
	NotANumber,
	NotAnInteger,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
	pub field: Field,
	pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: ", self.field.label())?;
		match &self.kind {
			FieldErrorKind::Missing => write!(f, "a value is required"),
			FieldErrorKind::NotANumber => write!(f, "must be a number"),
			FieldErrorKind::NotAnInteger => write!(f, "must be a whole number"),
		}
	}
}

/// The fields that failed to coerce, in wire order. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationError {
	pub errors: Vec<FieldError>,
}

impl ValidationError {
	pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
		self.errors.iter().map(|error| error.field)
	}
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, error) in self.errors.iter().enumerate() {
			if index > 0 {
				write!(f, "; ")?;
			}
			write!(f, "{}", error)?;
		}
		Ok(())
	}
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_transport_without_message_uses_fallback() {
		assert_eq!(
			PredictError::Transport(None).to_string(),
			"An error occurred. Please try again."
		);
		assert_eq!(
			PredictError::Transport(Some("connection refused".to_owned())).to_string(),
			"connection refused"
		);
	}

	#[test]
	fn test_http_message_is_shown_verbatim() {
		let error = PredictError::Http {
			status: 400,
			message: "Invalid input".to_owned(),
		};
		assert_eq!(error.to_string(), "Invalid input");
	}

	#[test]
	fn test_validation_message_lists_fields() {
		let error = ValidationError {
			errors: vec![
				FieldError {
					field: Field::Age,
					kind: FieldErrorKind::Missing,
				},
				FieldError {
					field: Field::Chol,
					kind: FieldErrorKind::NotANumber,
				},
			],
		};
		assert_eq!(
			error.to_string(),
			"Age: a value is required; Serum Cholesterol (mg/dl): must be a number"
		);
	}
}
