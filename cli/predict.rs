use crate::PredictOptions;
use anyhow::{anyhow, Result};
use colored::Colorize;
use heart_core::{
	collect, ClientConfig, ModelPrediction, Outcome, PredictionClient, PredictionResponse,
	Submission, UiState,
};
use heart_ui::{format_percent, BUSY_LABEL};
use log::info;
use std::{cell::RefCell, rc::Rc};

pub fn predict(options: PredictOptions) -> Result<()> {
	let config = ClientConfig::new(options.api_base_url.clone());
	let client = PredictionClient::new(&config)?;
	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()?;
	let state = Rc::new(RefCell::new(UiState::default()));
	let render: Rc<dyn Fn(&UiState)> = Rc::new(|state: &UiState| {
		if state.is_submitting() {
			eprintln!("{}", BUSY_LABEL.dimmed());
		}
	});
	let submission = Submission::begin(&state, render)
		.ok_or_else(|| anyhow!("a prediction is already in flight"))?;
	let result = match collect(|field| options.value(field)) {
		Ok(request) => {
			info!("requesting a prediction from {}", client.predict_url());
			runtime.block_on(client.predict(&request))
		}
		Err(error) => Err(error.into()),
	};
	submission.finish(result);
	let state = state.borrow();
	match &state.outcome {
		Outcome::Success(response) => {
			if options.json {
				println!("{}", serde_json::to_string_pretty(response)?);
			} else {
				print!("{}", format_cards(response));
			}
			Ok(())
		}
		Outcome::Failure(message) => Err(anyhow!("{}", message)),
		Outcome::None => Err(anyhow!("the prediction did not settle")),
	}
}

/// Render both model results as terminal cards, one per model, in display order.
pub fn format_cards(response: &PredictionResponse) -> String {
	response
		.models()
		.iter()
		.map(|(title, prediction)| format_card(title, prediction))
		.collect()
}

fn format_card(title: &str, prediction: &ModelPrediction) -> String {
	let label = if prediction.is_positive() {
		prediction.prediction_label.red().bold()
	} else {
		prediction.prediction_label.green().bold()
	};
	format!(
		"{}\n  {}\n  Confidence: {}\n",
		title.bold(),
		label,
		format_percent(prediction.probability)
	)
}
