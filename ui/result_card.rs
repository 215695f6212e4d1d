use crate::util::format_percent;
use heart_core::response::{ModelPrediction, PredictionResponse};
use html::{element, fragment, Node};

pub fn result_card(title: &'static str, prediction: &ModelPrediction) -> Node {
	let class = if prediction.is_positive() {
		"result-card result-positive"
	} else {
		"result-card result-negative"
	};
	element("div")
		.class(class)
		.child(element("h3").child(title))
		.child(
			element("p")
				.class("prediction-label")
				.child(element("b").child(prediction.prediction_label.clone())),
		)
		.child(
			element("p")
				.class("probability")
				.child(format!("Confidence: {}", format_percent(prediction.probability))),
		)
		.into()
}

pub fn result_cards(response: &PredictionResponse) -> Node {
	fragment(
		response
			.models()
			.iter()
			.map(|(title, prediction)| result_card(*title, *prediction)),
	)
}

/// The markup placed in the results container. It replaces whatever was there before.
pub fn render_results(response: &PredictionResponse) -> String {
	result_cards(response).render_to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn response() -> PredictionResponse {
		PredictionResponse {
			logistic_regression: ModelPrediction {
				prediction: 1,
				prediction_label: "Disease".to_owned(),
				probability: 0.82,
			},
			decision_tree: ModelPrediction {
				prediction: 0,
				prediction_label: "No Disease".to_owned(),
				probability: 0.35,
			},
		}
	}

	#[test]
	fn test_render_results() {
		insta::assert_snapshot!(render_results(&response()), @r###"<div class="result-card result-positive"><h3>Logistic Regression</h3><p class="prediction-label"><b>Disease</b></p><p class="probability">Confidence: 82.0%</p></div><div class="result-card result-negative"><h3>Decision Tree</h3><p class="prediction-label"><b>No Disease</b></p><p class="probability">Confidence: 35.0%</p></div>"###);
	}

	#[test]
	fn test_labels_are_escaped() {
		let mut response = response();
		response.decision_tree.prediction_label = "<No> Disease".to_owned();
		assert!(render_results(&response).contains("<b>&lt;No&gt; Disease</b>"));
	}
}
