use serde_json::Value;

/// The body of a successful `POST /predict`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PredictionResponse {
	pub logistic_regression: ModelPrediction,
	pub decision_tree: ModelPrediction,
}

impl PredictionResponse {
	/// The sub-results paired with their display titles, in display order.
	pub fn models(&self) -> [(&'static str, &ModelPrediction); 2] {
		[
			("Logistic Regression", &self.logistic_regression),
			("Decision Tree", &self.decision_tree),
		]
	}
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelPrediction {
	pub prediction: i64,
	pub prediction_label: String,
	pub probability: f64,
}

impl ModelPrediction {
	pub fn is_positive(&self) -> bool {
		self.prediction == 1
	}
}

/// The body of a failed request. The service sends either a message string or a list of validation errors.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ErrorResponse {
	#[serde(default)]
	pub detail: Option<Value>,
}

impl ErrorResponse {
	/// Falsy details (an empty string, zero, `false`) give no message.
	pub fn message(&self) -> Option<String> {
		match self.detail.as_ref()? {
			Value::String(detail) if detail.is_empty() => None,
			Value::String(detail) => Some(detail.clone()),
			Value::Number(detail) if detail.as_f64() == Some(0.0) => None,
			Value::Number(detail) => Some(detail.to_string()),
			Value::Bool(true) => Some("true".to_owned()),
			Value::Array(items) => {
				let messages = items
					.iter()
					.filter_map(validation_item_message)
					.collect::<Vec<_>>();
				if messages.is_empty() {
					None
				} else {
					Some(messages.join("; "))
				}
			}
			_ => None,
		}
	}
}

fn validation_item_message(item: &Value) -> Option<String> {
	let msg = item.get("msg")?.as_str()?;
	let location = item
		.get("loc")
		.and_then(Value::as_array)
		.and_then(|loc| loc.last())
		.and_then(|last| match last {
			Value::String(name) => Some(name.clone()),
			Value::Number(index) => Some(index.to_string()),
			_ => None,
		});
	match location {
		Some(location) => Some(format!("{}: {}", location, msg)),
		None => Some(msg.to_owned()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_detail_string() {
		let response: ErrorResponse = serde_json::from_str(r#"{"detail":"Invalid input"}"#).unwrap();
		assert_eq!(response.message().as_deref(), Some("Invalid input"));
	}

	#[test]
	fn test_detail_missing_or_null() {
		let response: ErrorResponse = serde_json::from_str(r#"{}"#).unwrap();
		assert_eq!(response.message(), None);
		let response: ErrorResponse = serde_json::from_str(r#"{"detail":null}"#).unwrap();
		assert_eq!(response.message(), None);
	}

	#[test]
	fn test_detail_empty_string() {
		let response: ErrorResponse = serde_json::from_str(r#"{"detail":""}"#).unwrap();
		assert_eq!(response.message(), None);
	}

	#[test]
	fn test_detail_scalar() {
		let response: ErrorResponse = serde_json::from_str(r#"{"detail":42}"#).unwrap();
		assert_eq!(response.message().as_deref(), Some("42"));
		let response: ErrorResponse = serde_json::from_str(r#"{"detail":false}"#).unwrap();
		assert_eq!(response.message(), None);
	}

	#[test]
	fn test_detail_validation_list() {
		let body = r#"{"detail":[
			{"loc":["body","age"],"msg":"Input should be less than or equal to 120","type":"less_than_equal"},
			{"loc":["body","chol"],"msg":"Field required","type":"missing"}
		]}"#;
		let response: ErrorResponse = serde_json::from_str(body).unwrap();
		assert_eq!(
			response.message().as_deref(),
			Some("age: Input should be less than or equal to 120; chol: Field required")
		);
	}
}
