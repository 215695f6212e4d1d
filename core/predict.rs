/*!
This module implements the prediction client, which posts a [`PredictionRequest`](../request/struct.PredictionRequest.html) to `{api_base_url}/predict` and classifies the response.
*/

use crate::{
	config::ClientConfig,
	error::{PredictError, PREDICTION_FAILED_MESSAGE},
	request::PredictionRequest,
	response::{ErrorResponse, PredictionResponse},
};
use log::{debug, warn};
use url::Url;

#[derive(Clone, Debug)]
pub struct PredictionClient {
	http: reqwest::Client,
	predict_url: Url,
}

impl PredictionClient {
	pub fn new(config: &ClientConfig) -> Result<PredictionClient, PredictError> {
		let predict_url = config
			.predict_url()
			.map_err(|error| PredictError::Config(error.to_string()))?;
		Ok(PredictionClient {
			http: reqwest::Client::new(),
			predict_url,
		})
	}

	pub fn predict_url(&self) -> &Url {
		&self.predict_url
	}

	/// Send a single request. There are no retries and no timeout.
	pub async fn predict(
		&self,
		request: &PredictionRequest,
	) -> Result<PredictionResponse, PredictError> {
		debug!("POST {}", self.predict_url);
		let response = self
			.http
			.post(self.predict_url.clone())
			.json(request)
			.send()
			.await
			.map_err(|error| PredictError::transport(&error))?;
		let status = response.status().as_u16();
		let body = response
			.bytes()
			.await
			.map_err(|error| PredictError::transport(&error))?;
		let result = classify_response(status, &body);
		if let Err(error) = &result {
			warn!("prediction failed with status {}: {}", status, error);
		}
		result
	}
}

/// Turn a status code and body into an outcome. Non-2xx bodies are read for a `detail` message.
pub fn classify_response(status: u16, body: &[u8]) -> Result<PredictionResponse, PredictError> {
	if !(200..300).contains(&status) {
		let error_response: ErrorResponse =
			serde_json::from_slice(body).map_err(|error| PredictError::Decode(error.to_string()))?;
		let message = error_response
			.message()
			.unwrap_or_else(|| PREDICTION_FAILED_MESSAGE.to_owned());
		return Err(PredictError::Http { status, message });
	}
	serde_json::from_slice(body).map_err(|error| PredictError::Decode(error.to_string()))
}
