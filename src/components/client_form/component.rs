use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::state::{Choice, ClientForm, Step};

pub const SENT_MESSAGE: &str = "Message envoyé avec succès!";

fn display(visible: bool) -> &'static str {
	if visible { "block" } else { "none" }
}

#[component]
pub fn ClientContactForm() -> impl IntoView {
	let form = RwSignal::new(ClientForm::default());
	let on_step = move |step: Step| move || display(form.with(|f| f.step == step));

	let on_submit = move |ev: MouseEvent| {
		ev.prevent_default();
		let Some(message) = form.try_update(ClientForm::submit).flatten() else {
			log::warn!("contact form: submitted without a choice");
			return;
		};
		log::info!(
			"contact form sent: {} from {} {}",
			message.choice.value(),
			message.first_name,
			message.last_name
		);
		let _ = window().alert_with_message(SENT_MESSAGE);
	};

	view! {
		<form id="client-form">
			<div id="formPage1" style:display=on_step(Step::Contact)>
				<label for="choice">"Objet:"</label>
				<select
					id="choice"
					name="choice"
					prop:value=move || form.with(|f| f.choice.map(Choice::value).unwrap_or_default())
					on:change=move |ev| form.update(|f| f.choice = Choice::from_value(&event_target_value(&ev)))
				>
					<option value="">"-- Choisir --"</option>
					<option value="complaint">"Réclamation"</option>
					<option value="request">"Demande"</option>
					<option value="other">"Autre"</option>
				</select>

				<label for="firstName">"Prénom:"</label>
				<input
					type="text"
					id="firstName"
					name="firstName"
					prop:value=move || form.with(|f| f.first_name.clone())
					on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
				/>

				<label for="lastName">"Nom:"</label>
				<input
					type="text"
					id="lastName"
					name="lastName"
					prop:value=move || form.with(|f| f.last_name.clone())
					on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
				/>

				<label for="email">"Email:"</label>
				<input
					type="email"
					id="email"
					name="email"
					prop:value=move || form.with(|f| f.email.clone())
					on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
				/>

				<button
					type="button"
					id="nextButton"
					disabled=move || !form.with(ClientForm::can_advance)
					on:click=move |_| {
						form.update(|f| {
							f.advance();
						})
					}
				>
					"Suivant"
				</button>
			</div>

			<div id="formPage2" style:display=on_step(Step::Details)>
				<div id="additionalFields">
					{move || {
						let field = form.with(ClientForm::detail_field);
						view! {
							<label for=field.id>{field.label}</label>
							<textarea
								id=field.id
								name=field.id
								rows="4"
								required=true
								prop:value=move || form.with(|f| f.details.clone())
								on:input=move |ev| form.update(|f| f.details = event_target_value(&ev))
							></textarea>
						}
					}}
				</div>
				<button type="button" id="backButton" on:click=move |_| form.update(ClientForm::back)>
					"Retour"
				</button>
				<button type="submit" id="submitButton" on:click=on_submit>
					"Envoyer"
				</button>
			</div>
		</form>
	}
}
