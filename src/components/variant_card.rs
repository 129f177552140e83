use std::time::Duration;

use leptos::prelude::*;

use crate::content::Variant;

/// How long the card stays enlarged before settling into its lifted pose.
pub const PRESS_DURATION: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPose {
	#[default]
	Rest,
	Pressed,
	Lifted,
}

impl CardPose {
	pub fn transform(self) -> &'static str {
		match self {
			CardPose::Rest => "",
			CardPose::Pressed => "scale(1.05)",
			CardPose::Lifted => "translateY(-5px)",
		}
	}
}

#[component]
pub fn VariantCard(variant: &'static Variant) -> impl IntoView {
	let pose = RwSignal::new(CardPose::Rest);

	let on_click = move |_| {
		pose.set(CardPose::Pressed);
		set_timeout(move || pose.set(CardPose::Lifted), PRESS_DURATION);
	};

	view! {
		<div class="variant-card" on:click=on_click style:transform=move || pose.get().transform()>
			<img src=variant.image alt=variant.name />
			<h3>{variant.name}</h3>
			<p>{variant.description}</p>
		</div>
	}
}
