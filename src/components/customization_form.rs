//! Product customization form with a live color preview.

use std::collections::BTreeMap;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::content::Variant;
use crate::error::PageError;

/// Initial value of the color picker.
pub const DEFAULT_COLOR: &str = "#000000";
/// Acknowledgment shown after submit.
pub const SUBMITTED_MESSAGE: &str = "Votre personnalisation a été envoyée avec succès!";

/// Named form fields as string pairs, like `Object.fromEntries(new FormData(form))`.
/// Entries whose value is not a string (files) are left out.
pub fn form_entries(form: &HtmlFormElement) -> Result<BTreeMap<String, String>, PageError> {
	let data = FormData::new_with_form(form)?;
	let mut entries = BTreeMap::new();
	let Some(iter) = js_sys::try_iter(data.as_ref())? else {
		return Ok(entries);
	};
	for entry in iter {
		let pair: js_sys::Array = entry?.dyn_into()?;
		if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
			entries.insert(key, value);
		}
	}
	Ok(entries)
}

/// Submits locally: logs the fields and shows [`SUBMITTED_MESSAGE`].
#[component]
pub fn CustomizationForm(variants: &'static [Variant]) -> impl IntoView {
	let form_ref = NodeRef::<leptos::html::Form>::new();
	let color = RwSignal::new(DEFAULT_COLOR.to_string());

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let Some(form) = form_ref.get() else {
			return;
		};
		match form_entries(&form) {
			Ok(details) => log::info!("customization submitted: {details:?}"),
			Err(err) => {
				log::error!("customization form: {err}");
				return;
			}
		}
		let _ = window().alert_with_message(SUBMITTED_MESSAGE);
	};

	view! {
		<form id="customizationForm" node_ref=form_ref on:submit=on_submit>
			<label for="model">"Modèle"</label>
			<select id="model" name="model">
				{variants
					.iter()
					.map(|v| view! { <option value=v.id>{v.name}</option> })
					.collect_view()}
			</select>

			<label for="color">"Couleur"</label>
			<input
				type="color"
				id="color"
				name="color"
				value=DEFAULT_COLOR
				on:input=move |ev| color.set(event_target_value(&ev))
			/>
			<span id="color-display" class="color-display" style:background-color=move || color.get()></span>

			<label for="engraving">"Gravure"</label>
			<input type="text" id="engraving" name="engraving" maxlength="30" />

			<label for="quantity">"Quantité"</label>
			<input type="number" id="quantity" name="quantity" min="1" value="1" />

			<button type="submit">"Envoyer"</button>
		</form>
	}
}
