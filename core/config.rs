/*!
This module defines the `ClientConfig` struct, which tells a [`PredictionClient`](../predict/struct.PredictionClient.html) where the prediction service lives.
*/

use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://heart-disease-prediction-app-lfsn.onrender.com";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClientConfig {
	pub api_base_url: Url,
}

impl Default for ClientConfig {
	fn default() -> ClientConfig {
		ClientConfig {
			api_base_url: Url::parse(DEFAULT_API_BASE_URL).unwrap(),
		}
	}
}

impl ClientConfig {
	pub fn new(api_base_url: Url) -> ClientConfig {
		ClientConfig { api_base_url }
	}

	/// `{api_base_url}/predict`, ignoring any trailing slash on the base.
	pub fn predict_url(&self) -> Result<Url, url::ParseError> {
		let base = self.api_base_url.as_str().trim_end_matches('/');
		Url::parse(&format!("{}/predict", base))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_predict_url() {
		let config = ClientConfig::default();
		assert_eq!(
			config.predict_url().unwrap().as_str(),
			"https://heart-disease-prediction-app-lfsn.onrender.com/predict"
		);
		let config = ClientConfig::new(Url::parse("http://localhost:8000/api/").unwrap());
		assert_eq!(
			config.predict_url().unwrap().as_str(),
			"http://localhost:8000/api/predict"
		);
	}
}
