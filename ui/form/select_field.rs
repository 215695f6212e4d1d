use super::field_label;
use heart_core::fields::Field;
use html::{element, Node};

/// A select for a categorical field. Fields without options render an empty select.
pub fn select_field(field: Field, value: Option<i64>) -> Node {
	let options = field
		.options()
		.unwrap_or(&[])
		.iter()
		.map(|option| {
			element("option")
				.attribute("value", option.value.to_string())
				.attribute("selected", value == Some(option.value))
				.child(option.label)
				.into()
		})
		.collect::<Vec<Node>>();
	field_label(
		field.name(),
		vec![
			field.label().into(),
			element("select")
				.class("form-select")
				.id(field.name())
				.attribute("name", field.name())
				.attribute("required", true)
				.children(options)
				.into(),
		],
	)
}

#[test]
fn test_select_field() {
	let html = select_field(Field::Sex, Some(1)).render_to_string();
	assert_eq!(
		html,
		r#"<label class="field-label" for="sex">Sex<select class="form-select" id="sex" name="sex" required><option value="0">Female</option><option value="1" selected>Male</option></select></label>"#
	);
}
