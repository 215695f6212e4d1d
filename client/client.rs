use heart_core::{
	collect,
	state::{SharedState, Submission, UiState},
	ClientConfig, Field, PredictionClient,
};
use heart_ui::{ids, view, View};
use std::rc::Rc;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, Document, HtmlElement};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	console_error_panic_hook::set_once();
	let window = web_sys::window().ok_or("no window")?;
	let document = window.document().ok_or("no document")?;
	let page = element::<HtmlElement>(&document, ids::PAGE_ID)?;
	let config: ClientConfig = match page.dataset().get("props") {
		Some(props) => serde_json::from_str(&props).map_err(|error| error.to_string())?,
		None => ClientConfig::default(),
	};
	let client = PredictionClient::new(&config).map_err(|error| error.to_string())?;
	let idle_label = button_text(&document)?.text_content().unwrap_or_default();
	let state = SharedState::default();
	let render: Rc<dyn Fn(&UiState)> = {
		let document = document.clone();
		Rc::new(move |state: &UiState| {
			if let Err(error) = apply(&document, &view(state, &idle_label)) {
				console::error_1(&error);
			}
		})
	};
	let form = element::<web_sys::HtmlFormElement>(&document, ids::FORM_ID)?;
	let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |event: web_sys::Event| {
		event.prevent_default();
		let submission = match Submission::begin(&state, render.clone()) {
			Some(submission) => submission,
			None => return,
		};
		let document = document.clone();
		let client = client.clone();
		wasm_bindgen_futures::spawn_local(async move {
			let result = match collect(|field| read_field(&document, field)) {
				Ok(request) => client.predict(&request).await,
				Err(error) => Err(error.into()),
			};
			submission.finish(result);
		});
	}));
	form.add_event_listener_with_callback("submit", callback_fn.as_ref().unchecked_ref())?;
	callback_fn.forget();
	Ok(())
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| format!("missing element #{}", id))?
		.dyn_into::<T>()
		.map_err(|_| format!("element #{} has an unexpected type", id).into())
}

fn child<T: JsCast>(document: &Document, selector: &str) -> Result<T, JsValue> {
	document
		.query_selector(selector)?
		.ok_or_else(|| format!("missing element {}", selector))?
		.dyn_into::<T>()
		.map_err(|_| format!("element {} has an unexpected type", selector).into())
}

fn button_text(document: &Document) -> Result<HtmlElement, JsValue> {
	child(
		document,
		&format!("#{} .{}", ids::SUBMIT_BUTTON_ID, ids::BUTTON_TEXT_CLASS),
	)
}

/// Read the raw value of a field's control. A missing control reads as empty and fails validation.
fn read_field(document: &Document, field: Field) -> String {
	let element = match document.get_element_by_id(field.name()) {
		Some(element) => element,
		None => return String::new(),
	};
	if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
		input.value()
	} else if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
		select.value()
	} else {
		String::new()
	}
}

fn set_display(element: &HtmlElement, display: &str) -> Result<(), JsValue> {
	element.style().set_property("display", display)
}

fn apply(document: &Document, view: &View) -> Result<(), JsValue> {
	let button = element::<web_sys::HtmlButtonElement>(document, ids::SUBMIT_BUTTON_ID)?;
	button.set_disabled(view.button.disabled);
	button_text(document)?.set_text_content(Some(&view.button.label));
	let loader = child::<HtmlElement>(
		document,
		&format!("#{} .{}", ids::SUBMIT_BUTTON_ID, ids::BUTTON_LOADER_CLASS),
	)?;
	set_display(
		&loader,
		if view.button.loader_visible {
			"inline-block"
		} else {
			"none"
		},
	)?;
	let results_section = element::<HtmlElement>(document, ids::RESULTS_SECTION_ID)?;
	match &view.results {
		Some(results) => {
			element::<HtmlElement>(document, ids::RESULTS_ID)?.set_inner_html(results);
			set_display(&results_section, "block")?;
		}
		None => set_display(&results_section, "none")?,
	}
	let error_message = element::<HtmlElement>(document, ids::ERROR_MESSAGE_ID)?;
	match &view.error {
		Some(message) => {
			error_message.set_text_content(Some(message));
			set_display(&error_message, "block")?;
		}
		None => set_display(&error_message, "none")?,
	}
	Ok(())
}
