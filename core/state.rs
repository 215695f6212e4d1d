/*!
This module models the state of the prediction form. [`UiState::next`](struct.UiState.html#method.next) is the only way the state changes, and a [`Submission`](struct.Submission.html) holds the submitting phase for exactly as long as one request is in flight.
*/

use crate::{error::PredictError, response::PredictionResponse};
use log::debug;
use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Submitting,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
	None,
	Success(PredictionResponse),
	Failure(String),
}

impl From<Result<PredictionResponse, PredictError>> for Outcome {
	fn from(result: Result<PredictionResponse, PredictError>) -> Outcome {
		match result {
			Ok(response) => Outcome::Success(response),
			Err(error) => Outcome::Failure(error.to_string()),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
	Submit,
	Settled(Outcome),
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
	pub phase: Phase,
	pub outcome: Outcome,
}

impl Default for UiState {
	fn default() -> UiState {
		UiState {
			phase: Phase::Idle,
			outcome: Outcome::None,
		}
	}
}

impl UiState {
	/// Apply an event. A submit while submitting and a settle while idle leave the state unchanged.
	pub fn next(self, event: Event) -> UiState {
		match (self.phase, event) {
			(Phase::Idle, Event::Submit) => UiState {
				phase: Phase::Submitting,
				outcome: Outcome::None,
			},
			(Phase::Submitting, Event::Settled(outcome)) => UiState {
				phase: Phase::Idle,
				outcome,
			},
			(_, _) => self,
		}
	}

	pub fn is_submitting(&self) -> bool {
		self.phase == Phase::Submitting
	}
}

pub type SharedState = Rc<RefCell<UiState>>;

/// The submitting phase of one request.
///
/// `begin` enters the phase and renders it. The phase is left when the submission is finished or dropped, whichever happens first, and the settled state is rendered again. A submission dropped without an outcome settles as a failure with the generic message.
pub struct Submission {
	state: SharedState,
	render: Rc<dyn Fn(&UiState)>,
	outcome: Option<Outcome>,
}

impl Submission {
	/// Returns `None` if a submission is already in flight.
	pub fn begin(state: &SharedState, render: Rc<dyn Fn(&UiState)>) -> Option<Submission> {
		if state.borrow().is_submitting() {
			debug!("ignoring submit while a prediction is in flight");
			return None;
		}
		transition(state, Event::Submit);
		render(&state.borrow());
		Some(Submission {
			state: state.clone(),
			render,
			outcome: None,
		})
	}

	pub fn finish(mut self, outcome: impl Into<Outcome>) {
		self.outcome = Some(outcome.into());
	}
}

impl Drop for Submission {
	fn drop(&mut self) {
		let outcome = self.outcome.take().unwrap_or_else(|| {
			Outcome::Failure(PredictError::Transport(None).to_string())
		});
		transition(&self.state, Event::Settled(outcome));
		(self.render)(&self.state.borrow());
	}
}

fn transition(state: &SharedState, event: Event) {
	let current = state.replace(UiState::default());
	state.replace(current.next(event));
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::response::ModelPrediction;
	use std::cell::Cell;

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
	fn test_submit_resets_outcome() {
		let state = UiState {
			phase: Phase::Idle,
			outcome: Outcome::Failure("stale".to_owned()),
		};
		let state = state.next(Event::Submit);
		assert_eq!(state.phase, Phase::Submitting);
		assert_eq!(state.outcome, Outcome::None);
	}

	#[test]
	fn test_settle_returns_to_idle() {
		let state = UiState::default()
			.next(Event::Submit)
			.next(Event::Settled(Outcome::Success(response())));
		assert_eq!(state.phase, Phase::Idle);
		assert_eq!(state.outcome, Outcome::Success(response()));
	}

	#[test]
	fn test_submit_while_submitting_is_ignored() {
		let state = UiState::default().next(Event::Submit);
		assert_eq!(state.clone().next(Event::Submit), state);
	}

	#[test]
	fn test_settle_while_idle_is_ignored() {
		let state = UiState::default();
		let next = state
			.clone()
			.next(Event::Settled(Outcome::Failure("late".to_owned())));
		assert_eq!(next, state);
	}

	#[test]
	fn test_submission_renders_busy_then_settled() {
		let state = SharedState::default();
		let renders = Rc::new(RefCell::new(Vec::new()));
		let render: Rc<dyn Fn(&UiState)> = {
			let renders = renders.clone();
			Rc::new(move |state: &UiState| renders.borrow_mut().push(state.clone()))
		};
		let submission = Submission::begin(&state, render.clone()).unwrap();
		assert!(Submission::begin(&state, render).is_none());
		submission.finish(Err::<PredictionResponse, _>(PredictError::Http {
			status: 422,
			message: "Invalid input".to_owned(),
		}));
		let renders = renders.borrow();
		assert_eq!(renders.len(), 2);
		assert_eq!(renders[0].phase, Phase::Submitting);
		assert_eq!(renders[1].phase, Phase::Idle);
		assert_eq!(renders[1].outcome, Outcome::Failure("Invalid input".to_owned()));
	}

	#[test]
	fn test_dropped_submission_releases_busy_state() {
		let state = SharedState::default();
		let rendered = Rc::new(Cell::new(0));
		let render: Rc<dyn Fn(&UiState)> = {
			let rendered = rendered.clone();
			Rc::new(move |_: &UiState| rendered.set(rendered.get() + 1))
		};
		{
			let _submission = Submission::begin(&state, render).unwrap();
			assert!(state.borrow().is_submitting());
		}
		assert_eq!(rendered.get(), 2);
		assert_eq!(state.borrow().phase, Phase::Idle);
		assert_eq!(
			state.borrow().outcome,
			Outcome::Failure("An error occurred. Please try again.".to_owned())
		);
	}
}
