use html::{element, Node};

pub fn h1(text: &'static str) -> Node {
	element("h1").class("h1").child(text).into()
}

pub fn p(text: &'static str) -> Node {
	element("p").class("p").child(text).into()
}
