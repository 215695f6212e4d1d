use html::{element, raw, void_element, Node};

#[derive(Clone, Debug)]
pub struct PageInfo {
	pub client_wasm_js_src: Option<String>,
}

pub fn document(page_info: &PageInfo, children: Vec<Node>) -> Node {
	let script = page_info
		.client_wasm_js_src
		.as_ref()
		.map(|client_wasm_js_src| {
			element("script")
				.attribute("type", "module")
				.child(raw(format!(
					r#"import init from "{}"; init()"#,
					client_wasm_js_src
				)))
		});
	html::fragment(vec![
		raw("<!DOCTYPE html>"),
		element("html")
			.attribute("lang", "en")
			.child(
				element("head")
					.child(void_element("meta").attribute("charset", "utf-8"))
					.child(
						void_element("meta")
							.attribute("content", "width=device-width, initial-scale=1")
							.attribute("name", "viewport"),
					)
					.child(element("title").child("Heart Disease Prediction"))
					.child(
						void_element("link")
							.attribute("href", "/styles.css")
							.attribute("rel", "stylesheet"),
					)
					.child(
						void_element("meta")
							.attribute(
								"content",
								"Estimate heart disease risk with two trained models",
							)
							.attribute("name", "description"),
					),
			)
			.child(element("body").children(children).child(script))
			.into(),
	])
}
