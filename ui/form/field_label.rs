use html::{element, Node};

pub fn field_label(html_for: &'static str, children: Vec<Node>) -> Node {
	element("label")
		.class("field-label")
		.attribute("for", html_for)
		.children(children)
		.into()
}
