use leptos::prelude::*;

pub const ZOOM_STEP: f64 = 0.2;
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 3.0;
const MAX_STEPS: u32 = ((MAX_ZOOM - MIN_ZOOM) / ZOOM_STEP + 0.5) as u32;

/// Linear zoom level, counted in whole steps above [`MIN_ZOOM`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zoom {
	steps: u32,
}

impl Zoom {
	pub fn scale(self) -> f64 {
		MIN_ZOOM + ZOOM_STEP * self.steps as f64
	}

	pub fn zoom_in(&mut self) {
		if self.steps < MAX_STEPS {
			self.steps += 1;
		}
	}

	pub fn zoom_out(&mut self) {
		self.steps = self.steps.saturating_sub(1);
	}

	pub fn reset(&mut self) {
		self.steps = 0;
	}

	pub fn transform(self) -> String {
		format!("scale({})", self.scale())
	}
}

#[component]
pub fn ImageZoom(
	#[prop(into)] src: String,
	#[prop(into, default = String::new())] alt: String,
) -> impl IntoView {
	let zoom = RwSignal::new(Zoom::default());

	view! {
		<div class="image-zoom">
			<div class="image-zoom-frame">
				<img id="mainImage" src=src alt=alt style:transform=move || zoom.get().transform() />
			</div>
			<div class="image-zoom-controls">
				<button id="zoomIn" on:click=move |_| zoom.update(Zoom::zoom_in)>
					<i class="fas fa-search-plus"></i>
				</button>
				<button id="zoomOut" on:click=move |_| zoom.update(Zoom::zoom_out)>
					<i class="fas fa-search-minus"></i>
				</button>
				<button id="resetZoom" on:click=move |_| zoom.update(Zoom::reset)>
					<i class="fas fa-undo"></i>
				</button>
			</div>
		</div>
	}
}
