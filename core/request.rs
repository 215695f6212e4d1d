/*!
This module defines the request record sent to the prediction service and the form collector that builds it from raw input strings.
*/

use crate::{
	error::{FieldError, FieldErrorKind, ValidationError},
	fields::{Field, FieldKind},
};

/// The JSON body of `POST /predict`. Field order matches the order the service expects.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PredictionRequest {
	pub age: i64,
	pub sex: i64,
	pub cp: i64,
	pub trestbps: i64,
	pub chol: i64,
	pub fbs: i64,
	pub restecg: i64,
	pub thalach: i64,
	pub exang: i64,
	pub oldpeak: f64,
	pub slope: i64,
	pub ca: i64,
	pub thal: i64,
}

impl PredictionRequest {
	pub fn get(&self, field: Field) -> f64 {
		match field {
			Field::Age => self.age as f64,
			Field::Sex => self.sex as f64,
			Field::Cp => self.cp as f64,
			Field::Trestbps => self.trestbps as f64,
			Field::Chol => self.chol as f64,
			Field::Fbs => self.fbs as f64,
			Field::Restecg => self.restecg as f64,
			Field::Thalach => self.thalach as f64,
			Field::Exang => self.exang as f64,
			Field::Oldpeak => self.oldpeak,
			Field::Slope => self.slope as f64,
			Field::Ca => self.ca as f64,
			Field::Thal => self.thal as f64,
		}
	}

	fn from_values(values: &[f64; 13]) -> PredictionRequest {
		let value = |field: Field| values[field as usize];
		let integer = |field: Field| value(field) as i64;
		PredictionRequest {
			age: integer(Field::Age),
			sex: integer(Field::Sex),
			cp: integer(Field::Cp),
			trestbps: integer(Field::Trestbps),
			chol: integer(Field::Chol),
			fbs: integer(Field::Fbs),
			restecg: integer(Field::Restecg),
			thalach: integer(Field::Thalach),
			exang: integer(Field::Exang),
			oldpeak: value(Field::Oldpeak),
			slope: integer(Field::Slope),
			ca: integer(Field::Ca),
			thal: integer(Field::Thal),
		}
	}
}

/// Read every field through `read` and coerce the raw strings into a request. All invalid fields are reported together.
pub fn collect<F>(mut read: F) -> Result<PredictionRequest, ValidationError>
where
	F: FnMut(Field) -> String,
{
	let mut values = [0.0; 13];
	let mut errors = Vec::new();
	for field in Field::ALL.iter().copied() {
		let raw = read(field);
		match coerce(field, &raw) {
			Ok(value) => values[field as usize] = value,
			Err(kind) => errors.push(FieldError { field, kind }),
		}
	}
	if !errors.is_empty() {
		return Err(ValidationError { errors });
	}
	Ok(PredictionRequest::from_values(&values))
}

pub fn coerce(field: Field, raw: &str) -> Result<f64, FieldErrorKind> {
	let raw = raw.trim();
	if raw.is_empty() {
		return Err(FieldErrorKind::Missing);
	}
	let value: f64 = raw.parse().map_err(|_| FieldErrorKind::NotANumber)?;
	if !value.is_finite() {
		return Err(FieldErrorKind::NotANumber);
	}
	if field.kind() == FieldKind::Integer && value.fract() != 0.0 {
		return Err(FieldErrorKind::NotAnInteger);
	}
	Ok(value)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BTreeMap;

	fn sample_form() -> BTreeMap<Field, &'static str> {
		vec![
			(Field::Age, "63"),
			(Field::Sex, "1"),
			(Field::Cp, "3"),
			(Field::Trestbps, "145"),
			(Field::Chol, "233"),
			(Field::Fbs, "1"),
			(Field::Restecg, "0"),
			(Field::Thalach, "150"),
			(Field::Exang, "0"),
			(Field::Oldpeak, "2.3"),
			(Field::Slope, "0"),
			(Field::Ca, "0"),
			(Field::Thal, "1"),
		]
		.into_iter()
		.collect()
	}

	#[test]
	fn test_collect_matches_numeric_coercion() {
		let form = sample_form();
		let request = collect(|field| form[&field].to_owned()).unwrap();
		for (field, raw) in form.iter() {
			assert_eq!(request.get(*field), raw.parse::<f64>().unwrap(), "{}", field);
		}
	}

	#[test]
	fn test_collect_trims_whitespace() {
		let mut form = sample_form();
		form.insert(Field::Age, " 54 ");
		let request = collect(|field| form[&field].to_owned()).unwrap();
		assert_eq!(request.age, 54);
	}

	#[test]
	fn test_collect_reports_every_invalid_field() {
		let mut form = sample_form();
		form.insert(Field::Age, "");
		form.insert(Field::Chol, "abc");
		form.insert(Field::Ca, "1.5");
		form.insert(Field::Thalach, "400");
		let error = collect(|field| form[&field].to_owned()).unwrap_err();
		assert_eq!(
			error.errors,
			vec![
				FieldError {
					field: Field::Age,
					kind: FieldErrorKind::Missing,
				},
				FieldError {
					field: Field::Chol,
					kind: FieldErrorKind::NotANumber,
				},
				FieldError {
					field: Field::Ca,
					kind: FieldErrorKind::NotAnInteger,
				},
			]
		);
	}

	#[test]
	fn test_values_outside_form_bounds_are_forwarded() {
		assert_eq!(coerce(Field::Chol, "90"), Ok(90.0));
		assert_eq!(coerce(Field::Age, "130"), Ok(130.0));
		assert_eq!(coerce(Field::Oldpeak, "-1.5"), Ok(-1.5));
		let mut form = sample_form();
		form.insert(Field::Thalach, "400");
		let request = collect(|field| form[&field].to_owned()).unwrap();
		assert_eq!(request.thalach, 400);
	}

	#[test]
	fn test_coerce_rejects_non_finite() {
		assert_eq!(coerce(Field::Oldpeak, "NaN"), Err(FieldErrorKind::NotANumber));
		assert_eq!(coerce(Field::Oldpeak, "inf"), Err(FieldErrorKind::NotANumber));
		assert_eq!(coerce(Field::Oldpeak, "0.5"), Ok(0.5));
	}

	#[test]
	fn test_serializes_with_wire_names_in_order() {
		let form = sample_form();
		let request = collect(|field| form[&field].to_owned()).unwrap();
		let json = serde_json::to_string(&request).unwrap();
		assert_eq!(
			json,
			r#"{"age":63,"sex":1,"cp":3,"trestbps":145,"chol":233,"fbs":1,"restecg":0,"thalach":150,"exang":0,"oldpeak":2.3,"slope":0,"ca":0,"thal":1}"#
		);
	}
}
