/*!
This crate renders the prediction form page. The markup it produces is the contract with the browser client: every id the client looks up is rendered here.
*/

use self::document::{document, PageInfo};
use heart_core::{config::ClientConfig, fields::Field};
use heart_ui as ui;
use html::{element, Node};
use std::collections::BTreeMap;

mod document;

pub const SUBMIT_LABEL: &str = "Predict";

#[derive(Clone, Debug, Default)]
pub struct PageProps {
	pub config: ClientConfig,
	pub client_wasm_js_src: Option<String>,
	/// Initial values for the form controls, keyed by field.
	pub values: BTreeMap<Field, String>,
}

pub fn render(props: &PageProps) -> String {
	let page_info = PageInfo {
		client_wasm_js_src: props.client_wasm_js_src.clone(),
	};
	let client_props = serde_json::to_string(&props.config).unwrap_or_default();
	let page = element("div")
		.id(ui::ids::PAGE_ID)
		.class("s1")
		.attribute("data-props", client_props)
		.child(ui::h1("Heart Disease Prediction"))
		.child(ui::p(
			"Enter the patient's clinical measurements to estimate the likelihood of heart disease.",
		))
		.child(prediction_form(&props.values))
		.child(ui::error_alert(ui::ids::ERROR_MESSAGE_ID, true, Vec::new()))
		.child(results_section());
	document(&page_info, vec![page.into()]).render_to_string()
}

fn prediction_form(values: &BTreeMap<Field, String>) -> Node {
	let fields = Field::ALL
		.iter()
		.copied()
		.map(|field| {
			let value = values.get(&field).cloned();
			if field.options().is_some() {
				ui::select_field(field, value.and_then(|value| value.trim().parse().ok()))
			} else {
				ui::number_field(field, value)
			}
		})
		.collect::<Vec<_>>();
	ui::form(
		ui::ids::FORM_ID,
		vec![
			element("div")
				.class("predict-form-grid")
				.children(fields)
				.into(),
			ui::submit_button(ui::ids::SUBMIT_BUTTON_ID, SUBMIT_LABEL),
		],
	)
}

fn results_section() -> Node {
	element("div")
		.id(ui::ids::RESULTS_SECTION_ID)
		.class("results-section")
		.attribute("style", "display: none")
		.child(element("h2").class("h2").child("Prediction Results"))
		.child(
			element("div")
				.id(ui::ids::RESULTS_ID)
				.class("results-grid"),
		)
		.into()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_renders_every_control() {
		let html = render(&PageProps::default());
		for field in Field::ALL.iter() {
			assert!(html.contains(&format!(r#"id="{}""#, field.name())), "{}", field);
		}
		for id in &[
			ui::ids::FORM_ID,
			ui::ids::SUBMIT_BUTTON_ID,
			ui::ids::RESULTS_SECTION_ID,
			ui::ids::RESULTS_ID,
			ui::ids::ERROR_MESSAGE_ID,
		] {
			assert!(html.contains(&format!(r#"id="{}""#, id)), "{}", id);
		}
		assert!(html.contains(r#"<span class="btn-text">Predict</span>"#));
	}

	#[test]
	fn test_embeds_client_props() {
		let html = render(&PageProps::default());
		assert!(html.contains(
			r#"data-props="{&quot;api_base_url&quot;:&quot;https://heart-disease-prediction-app-lfsn.onrender.com/&quot;}""#
		));
	}

	#[test]
	fn test_prefills_values() {
		let mut props = PageProps::default();
		props.values.insert(Field::Age, "63".to_owned());
		props.values.insert(Field::Cp, "2".to_owned());
		let html = render(&props);
		assert!(html.contains(r#"id="age" name="age" type="number" min="1" max="120" step="1" required value="63">"#));
		assert!(html.contains(r#"<option value="2" selected>Non-anginal pain</option>"#));
	}

	#[test]
	fn test_loads_client_script() {
		let props = PageProps {
			client_wasm_js_src: Some("/js/heart_client.js".to_owned()),
			..Default::default()
		};
		let html = render(&props);
		assert!(html.ends_with(
			r#"<script type="module">import init from "/js/heart_client.js"; init()</script></body></html>"#
		));
	}
}
