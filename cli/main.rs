//! This module contains the main entrypoint to the heart cli.

use clap::{Args, Parser};
use colored::Colorize;
use heart_core::{config::DEFAULT_API_BASE_URL, fields::Field};
use std::path::PathBuf;
use url::Url;

mod predict;
mod serve;

#[derive(Parser)]
#[clap(
	about = "Estimate the likelihood of heart disease with a remote prediction service.",
	version,
)]
enum Options {
	#[clap(name = "predict")]
	Predict(PredictOptions),
	#[clap(name = "serve")]
	Serve(ServeOptions),
}

#[derive(Args, Debug)]
#[clap(about = "request a prediction for one patient")]
#[clap(long_about = "validate the clinical measurements and ask the prediction service for both model results")]
pub struct PredictOptions {
	#[clap(long, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
	pub api_base_url: Url,
	#[clap(long, help = "print the response as json instead of result cards")]
	pub json: bool,
	#[clap(long, help = "age in years")]
	pub age: Option<String>,
	#[clap(long, help = "sex, 0 = female, 1 = male")]
	pub sex: Option<String>,
	#[clap(long, help = "chest pain type, 0 to 3")]
	pub cp: Option<String>,
	#[clap(long, help = "resting blood pressure in mm Hg")]
	pub trestbps: Option<String>,
	#[clap(long, help = "serum cholesterol in mg/dl")]
	pub chol: Option<String>,
	#[clap(long, help = "fasting blood sugar > 120 mg/dl, 0 or 1")]
	pub fbs: Option<String>,
	#[clap(long, help = "resting ecg result, 0 to 2")]
	pub restecg: Option<String>,
	#[clap(long, help = "maximum heart rate achieved")]
	pub thalach: Option<String>,
	#[clap(long, help = "exercise induced angina, 0 or 1")]
	pub exang: Option<String>,
	#[clap(long, help = "st depression induced by exercise")]
	pub oldpeak: Option<String>,
	#[clap(long, help = "slope of the peak exercise st segment, 0 to 2")]
	pub slope: Option<String>,
	#[clap(long, help = "number of major vessels colored by fluoroscopy, 0 to 4")]
	pub ca: Option<String>,
	#[clap(long, help = "thalassemia, 0 to 3")]
	pub thal: Option<String>,
}

impl PredictOptions {
	/// The raw text given for a field, or an empty string if the flag was omitted.
	pub fn value(&self, field: Field) -> String {
		let value = match field {
			Field::Age => &self.age,
			Field::Sex => &self.sex,
			Field::Cp => &self.cp,
			Field::Trestbps => &self.trestbps,
			Field::Chol => &self.chol,
			Field::Fbs => &self.fbs,
			Field::Restecg => &self.restecg,
			Field::Thalach => &self.thalach,
			Field::Exang => &self.exang,
			Field::Oldpeak => &self.oldpeak,
			Field::Slope => &self.slope,
			Field::Ca => &self.ca,
			Field::Thal => &self.thal,
		};
		value.clone().unwrap_or_default()
	}
}

#[derive(Args, Debug)]
#[clap(about = "serve the prediction form")]
#[clap(long_about = "serve the prediction form page and the browser client bundle")]
pub struct ServeOptions {
	#[clap(long, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
	pub api_base_url: Url,
	#[clap(long, default_value = "0.0.0.0")]
	pub host: std::net::IpAddr,
	#[clap(long, env = "PORT", default_value = "8080")]
	pub port: u16,
	#[clap(
		long,
		env = "ASSETS_DIR",
		help = "the directory holding styles.css and the js/ output of the client crate"
	)]
	pub assets: Option<PathBuf>,
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.format_timestamp_millis()
		.init();
	let options = Options::parse();
	let result = match options {
		Options::Predict(options) => predict::predict(options),
		Options::Serve(options) => serve::cli_serve(options),
	};
	if let Err(error) = result {
		eprintln!("{}: {}", "error".red().bold(), error);
		std::process::exit(1);
	}
}
