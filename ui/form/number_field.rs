use super::field_label;
use heart_core::fields::{Field, FieldKind};
use html::{void_element, Node};

pub fn number_field(field: Field, value: Option<String>) -> Node {
	let bounds = field.bounds();
	let step = match field.kind() {
		FieldKind::Integer => "1",
		FieldKind::Decimal => "0.1",
	};
	field_label(
		field.name(),
		vec![
			field.label().into(),
			void_element("input")
				.class("form-text-field")
				.id(field.name())
				.attribute("name", field.name())
				.attribute("type", "number")
				.attribute("min", bounds.min.to_string())
				.attribute("max", bounds.max.to_string())
				.attribute("step", step)
				.attribute("required", true)
				.attribute("value", value)
				.into(),
		],
	)
}

#[test]
fn test_number_field() {
	let html = number_field(Field::Oldpeak, None).render_to_string();
	assert_eq!(
		html,
		r#"<label class="field-label" for="oldpeak">ST Depression (Oldpeak)<input class="form-text-field" id="oldpeak" name="oldpeak" type="number" min="0" max="10" step="0.1" required></label>"#
	);
}
