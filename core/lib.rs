/*!
This crate implements the client side of the heart disease prediction service: collecting the form fields into a [`PredictionRequest`](request/struct.PredictionRequest.html), posting it with a [`PredictionClient`](predict/struct.PredictionClient.html), and tracking the submission in a [`UiState`](state/struct.UiState.html).
*/

#![allow(clippy::tabs_in_doc_comments)]

pub mod config;
pub mod error;
pub mod fields;
pub mod predict;
pub mod request;
pub mod response;
pub mod state;

pub use self::{
	config::ClientConfig,
	error::{PredictError, ValidationError},
	fields::Field,
	predict::PredictionClient,
	request::{collect, PredictionRequest},
	response::{ModelPrediction, PredictionResponse},
	state::{Event, Outcome, Phase, Submission, UiState},
};
