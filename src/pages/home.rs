use leptos::prelude::*;

use crate::components::carousel::ImageCarousel;
use crate::components::client_form::ClientContactForm;
use crate::components::customization_form::CustomizationForm;
use crate::components::diagram::DiagramEditor;
use crate::components::image_zoom::ImageZoom;
use crate::components::section_nav::SectionNav;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::variant_card::VariantCard;
use crate::content::{MAIN_IMAGE, SECTIONS, SLIDES, VARIANTS};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<header class="site-header">
				<SectionNav sections=SECTIONS />
				<ThemeToggle />
			</header>

			<main>
				<section id="presentation" class="section">
					<h1>"Vitrine"</h1>
					<ImageCarousel slides=SLIDES />
				</section>

				<section id="variantes" class="section">
					<h2>"Variantes"</h2>
					<div class="variant-grid">
						{VARIANTS.iter().map(|v| view! { <VariantCard variant=v /> }).collect_view()}
					</div>
				</section>

				<section id="galerie" class="section">
					<h2>"Galerie"</h2>
					<ImageZoom src=MAIN_IMAGE alt="Produit" />
				</section>

				<section id="personnalisation" class="section">
					<h2>"Personnalisation"</h2>
					<CustomizationForm variants=VARIANTS />
				</section>

				<section id="diagramme" class="section">
					<h2>"Diagramme"</h2>
					<p class="subtitle">"Cliquez sur + pour ajouter une boîte reliée."</p>
					<DiagramEditor />
				</section>

				<section id="contact" class="section">
					<h2>"Contact"</h2>
					<ClientContactForm />
				</section>
			</main>
		</ErrorBoundary>
	}
}
