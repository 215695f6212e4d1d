use crate::ids::{BUTTON_LOADER_CLASS, BUTTON_TEXT_CLASS};
use html::{element, Node};

/// A submit button with a text label and a loader that is hidden until the form is busy.
pub fn submit_button(id: &'static str, label: &'static str) -> Node {
	element("button")
		.class("button")
		.id(id)
		.attribute("type", "submit")
		.child(element("span").class(BUTTON_TEXT_CLASS).child(label))
		.child(
			element("span")
				.class(BUTTON_LOADER_CLASS)
				.attribute("style", "display: none"),
		)
		.into()
}

#[test]
fn test_submit_button() {
	let html = submit_button("submitButton", "Predict").render_to_string();
	assert_eq!(
		html,
		r#"<button class="button" id="submitButton" type="submit"><span class="btn-text">Predict</span><span class="btn-loader" style="display: none"></span></button>"#
	);
}
