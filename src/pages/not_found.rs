use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<h1>"Page introuvable"</h1>
		<a href="/">"Retour à l'accueil"</a>
	}
}
