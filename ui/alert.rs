use html::{element, Node};

/// An error alert. Hidden alerts are rendered with `display: none` so a script can reveal them later.
pub fn error_alert(id: &'static str, hidden: bool, children: Vec<Node>) -> Node {
	let style = if hidden { Some("display: none") } else { None };
	element("div")
		.class("alert-wrapper alert-level-danger")
		.id(id)
		.attribute("role", "alert")
		.attribute("style", style.map(str::to_owned))
		.children(children)
		.into()
}

#[test]
fn test_hidden_error_alert() {
	let html = error_alert("errorMessage", true, Vec::new()).render_to_string();
	assert_eq!(
		html,
		r#"<div class="alert-wrapper alert-level-danger" id="errorMessage" role="alert" style="display: none"></div>"#
	);
}
