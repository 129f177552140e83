use std::fmt;

use leptos::prelude::*;
use web_sys::Element;

use crate::error::{self, PageError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	/// Icon offering the way back: a sun while dark, a moon while light.
	pub fn icon_class(self) -> &'static str {
		match self {
			Theme::Light => "fas fa-moon",
			Theme::Dark => "fas fa-sun",
		}
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

fn root_element() -> Result<Element, PageError> {
	error::document()?
		.document_element()
		.ok_or_else(|| PageError::MissingElement("html".into()))
}

/// Flips `data-theme` on the root element. Not persisted across reloads.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let theme = RwSignal::new(Theme::default());

	Effect::new(move |_| {
		let theme = theme.get();
		let applied = root_element().and_then(|root| {
			root.set_attribute("data-theme", theme.as_str())
				.map_err(PageError::from)
		});
		match applied {
			Ok(()) => log::debug!("theme set to {theme}"),
			Err(err) => log::error!("theme toggle: {err}"),
		}
	});

	view! {
		<button
			id="theme-toggle"
			aria-label="Toggle theme"
			on:click=move |_| theme.update(|t| *t = t.toggled())
		>
			<i class=move || theme.get().icon_class()></i>
		</button>
	}
}
