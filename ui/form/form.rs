use html::{element, Node};

/// A form that is submitted by script rather than by navigation, so it has no action or method.
pub fn form(id: &'static str, children: Vec<Node>) -> Node {
	element("form")
		.id(id)
		.class("form")
		.attribute("autocomplete", "off")
		.attribute("novalidate", true)
		.children(children)
		.into()
}
