/*!
This module maps a [`UiState`] to what the page should show. It holds no state of its own, so the browser client and the tests render through the same function.
*/

use crate::result_card::render_results;
use heart_core::state::{Outcome, Phase, UiState};

pub const BUSY_LABEL: &str = "Predicting...";

#[derive(Clone, Debug, PartialEq)]
pub struct View {
	pub button: ButtonView,
	/// The results markup, or `None` when the results section is hidden.
	pub results: Option<String>,
	/// The error message, or `None` when the error container is hidden.
	pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
	pub disabled: bool,
	pub label: String,
	pub loader_visible: bool,
}

pub fn view(state: &UiState, idle_label: &str) -> View {
	let button = match state.phase {
		Phase::Idle => ButtonView {
			disabled: false,
			label: idle_label.to_owned(),
			loader_visible: false,
		},
		Phase::Submitting => ButtonView {
			disabled: true,
			label: BUSY_LABEL.to_owned(),
			loader_visible: true,
		},
	};
	let (results, error) = match &state.outcome {
		Outcome::None => (None, None),
		Outcome::Success(response) => (Some(render_results(response)), None),
		Outcome::Failure(message) => (None, Some(message.clone())),
	};
	View {
		button,
		results,
		error,
	}
}
