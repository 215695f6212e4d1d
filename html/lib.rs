use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;

#[derive(Clone, Debug, From)]
pub enum Node {
	RawText(RawTextNode),
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

#[derive(Clone, Debug)]
pub struct RawTextNode(pub Cow<'static, str>);

#[derive(Clone, Debug)]
pub struct EscapedTextNode(pub Cow<'static, str>);

#[derive(Clone, Debug)]
pub struct FragmentNode {
	pub children: Vec<Node>,
}

#[derive(Clone, Debug)]
pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

#[derive(Clone, Debug, From)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

/// Start an element that takes children.
pub fn element(name: &'static str) -> HostNode {
	HostNode {
		name,
		attributes: Vec::new(),
		children: Vec::new(),
		self_closing: false,
	}
}

/// Start a void element such as `input` or `meta`.
pub fn void_element(name: &'static str) -> HostNode {
	HostNode {
		self_closing: true,
		..element(name)
	}
}

pub fn fragment(children: impl IntoIterator<Item = Node>) -> Node {
	Node::Fragment(FragmentNode {
		children: children.into_iter().collect(),
	})
}

pub fn raw(text: impl Into<Cow<'static, str>>) -> Node {
	Node::RawText(RawTextNode(text.into()))
}

impl HostNode {
	pub fn attribute(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> HostNode {
		self.attributes.push((key, value.into()));
		self
	}

	pub fn id(self, id: impl Into<AttributeValue>) -> HostNode {
		self.attribute("id", id)
	}

	pub fn class(self, class: impl Into<AttributeValue>) -> HostNode {
		self.attribute("class", class)
	}

	pub fn child(mut self, child: impl Into<Node>) -> HostNode {
		self.children.push(child.into());
		self
	}

	pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> HostNode {
		self.children.extend(children);
		self
	}

	pub fn render_to_string(self) -> String {
		Node::Host(self).render_to_string()
	}
}

impl Node {
	pub fn render_to_string(&self) -> String {
		self.to_string()
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::RawText(node) => {
				write!(f, "{}", node)?;
			}
			Node::EscapedText(node) => {
				write!(f, "{}", node)?;
			}
			Node::Fragment(node) => {
				write!(f, "{}", node)?;
			}
			Node::Host(node) => {
				write!(f, "{}", node)?;
			}
			Node::Option(node) => {
				if let Some(node) = node {
					write!(f, "{}", node)?;
				}
			}
			Node::Vec(node) => {
				for node in node {
					write!(f, "{}", node)?;
				}
			}
		};
		Ok(())
	}
}

impl std::fmt::Display for FragmentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for HostNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(value) => {
					if let Some(true) = value {
						write!(f, " {}", key)?;
					}
				}
				AttributeValue::String(value) => {
					if let Some(value) = value {
						write!(f, r#" {}=""#, key)?;
						escape(f, value)?;
						write!(f, r#"""#)?;
					}
				}
			}
		}
		write!(f, ">")?;
		if !self.self_closing {
			for child in self.children.iter() {
				write!(f, "{}", child)?;
			}
			write!(f, "</{}>", self.name)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for RawTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::fmt::Display for EscapedTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		escape(f, &self.0)
	}
}

fn escape(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => write!(f, "&gt;")?,
			'<' => write!(f, "&lt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			'\'' => write!(f, "&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_element() {
		let html = element("div")
			.class("card")
			.child(element("b").child("Hello World"))
			.render_to_string();
		assert_eq!(html, r#"<div class="card"><b>Hello World</b></div>"#);
	}

	#[test]
	fn test_escaping() {
		let html = element("p")
			.attribute("title", "a \"quoted\" title")
			.child("<script>&")
			.render_to_string();
		assert_eq!(
			html,
			r#"<p title="a &quot;quoted&quot; title">&lt;script&gt;&amp;</p>"#
		);
	}

	#[test]
	fn test_void_element_and_bool_attributes() {
		let html = void_element("input")
			.attribute("required", true)
			.attribute("disabled", false)
			.attribute("value", None::<String>)
			.render_to_string();
		assert_eq!(html, "<input required>");
	}
}
