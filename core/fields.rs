/*!
This module defines the 13 input fields of the prediction form along with the metadata needed to validate and render them.
*/

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
	Age,
	Sex,
	Cp,
	Trestbps,
	Chol,
	Fbs,
	Restecg,
	Thalach,
	Exang,
	Oldpeak,
	Slope,
	Ca,
	Thal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
	Integer,
	Decimal,
}

/// Inclusive bounds accepted by the prediction service. The form uses them as input hints only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub min: f64,
	pub max: f64,
}

impl Bounds {
	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}
}

/// A labelled choice for a categorical field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldOption {
	pub value: i64,
	pub label: &'static str,
}

const fn option(value: i64, label: &'static str) -> FieldOption {
	FieldOption { value, label }
}

const SEX_OPTIONS: &[FieldOption] = &[option(0, "Female"), option(1, "Male")];
const CP_OPTIONS: &[FieldOption] = &[
	option(0, "Typical angina"),
	option(1, "Atypical angina"),
	option(2, "Non-anginal pain"),
	option(3, "Asymptomatic"),
];
const NO_YES_OPTIONS: &[FieldOption] = &[option(0, "No"), option(1, "Yes")];
const RESTECG_OPTIONS: &[FieldOption] = &[
	option(0, "Normal"),
	option(1, "ST-T wave abnormality"),
	option(2, "Left ventricular hypertrophy"),
];
const SLOPE_OPTIONS: &[FieldOption] = &[
	option(0, "Upsloping"),
	option(1, "Flat"),
	option(2, "Downsloping"),
];
const THAL_OPTIONS: &[FieldOption] = &[
	option(0, "Unknown"),
	option(1, "Normal"),
	option(2, "Fixed defect"),
	option(3, "Reversible defect"),
];

impl Field {
	/// All fields in the order they are sent to the service.
	pub const ALL: [Field; 13] = [
		Field::Age,
		Field::Sex,
		Field::Cp,
		Field::Trestbps,
		Field::Chol,
		Field::Fbs,
		Field::Restecg,
		Field::Thalach,
		Field::Exang,
		Field::Oldpeak,
		Field::Slope,
		Field::Ca,
		Field::Thal,
	];

	/// The JSON key and the id of the input control.
	pub fn name(self) -> &'static str {
		match self {
			Field::Age => "age",
			Field::Sex => "sex",
			Field::Cp => "cp",
			Field::Trestbps => "trestbps",
			Field::Chol => "chol",
			Field::Fbs => "fbs",
			Field::Restecg => "restecg",
			Field::Thalach => "thalach",
			Field::Exang => "exang",
			Field::Oldpeak => "oldpeak",
			Field::Slope => "slope",
			Field::Ca => "ca",
			Field::Thal => "thal",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Field::Age => "Age",
			Field::Sex => "Sex",
			Field::Cp => "Chest Pain Type",
			Field::Trestbps => "Resting Blood Pressure (mm Hg)",
			Field::Chol => "Serum Cholesterol (mg/dl)",
			Field::Fbs => "Fasting Blood Sugar > 120 mg/dl",
			Field::Restecg => "Resting ECG",
			Field::Thalach => "Maximum Heart Rate",
			Field::Exang => "Exercise Induced Angina",
			Field::Oldpeak => "ST Depression (Oldpeak)",
			Field::Slope => "Slope of Peak Exercise ST",
			Field::Ca => "Major Vessels Colored (0-4)",
			Field::Thal => "Thalassemia",
		}
	}

	pub fn kind(self) -> FieldKind {
		match self {
			Field::Oldpeak => FieldKind::Decimal,
			_ => FieldKind::Integer,
		}
	}

	pub fn bounds(self) -> Bounds {
		let (min, max) = match self {
			Field::Age => (1.0, 120.0),
			Field::Sex => (0.0, 1.0),
			Field::Cp => (0.0, 3.0),
			Field::Trestbps => (80.0, 250.0),
			Field::Chol => (100.0, 600.0),
			Field::Fbs => (0.0, 1.0),
			Field::Restecg => (0.0, 2.0),
			Field::Thalach => (60.0, 220.0),
			Field::Exang => (0.0, 1.0),
			Field::Oldpeak => (0.0, 10.0),
			Field::Slope => (0.0, 2.0),
			Field::Ca => (0.0, 4.0),
			Field::Thal => (0.0, 3.0),
		};
		Bounds { min, max }
	}

	/// The choices for categorical fields, or `None` for fields entered as numbers.
	pub fn options(self) -> Option<&'static [FieldOption]> {
		match self {
			Field::Sex => Some(SEX_OPTIONS),
			Field::Cp => Some(CP_OPTIONS),
			Field::Fbs | Field::Exang => Some(NO_YES_OPTIONS),
			Field::Restecg => Some(RESTECG_OPTIONS),
			Field::Slope => Some(SLOPE_OPTIONS),
			Field::Thal => Some(THAL_OPTIONS),
			_ => None,
		}
	}

	pub fn from_name(name: &str) -> Option<Field> {
		Field::ALL.iter().copied().find(|field| field.name() == name)
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_names_round_trip() {
		for field in Field::ALL.iter().copied() {
			assert_eq!(Field::from_name(field.name()), Some(field));
		}
		assert_eq!(Field::from_name("cholesterol"), None);
	}

	#[test]
	fn test_options_lie_within_bounds() {
		for field in Field::ALL.iter().copied() {
			if let Some(options) = field.options() {
				let bounds = field.bounds();
				for option in options {
					assert!(bounds.contains(option.value as f64), "{}", field);
				}
			}
		}
	}
}
