use leptos::html::Img;
use leptos::prelude::*;

use crate::content::Slide;

/// Position in a non-empty ring of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
	index: usize,
	len: usize,
}

impl Carousel {
	pub fn new(len: usize) -> Option<Self> {
		(len > 0).then_some(Self { index: 0, len })
	}

	pub fn index(self) -> usize {
		self.index
	}

	pub fn next(&mut self) {
		self.index = (self.index + 1) % self.len;
	}

	pub fn prev(&mut self) {
		self.index = (self.index + self.len - 1) % self.len;
	}

	pub fn transform(self) -> String {
		format!("translateX(-{}%)", self.index * 100)
	}
}

#[component]
pub fn ImageCarousel(slides: &'static [Slide]) -> impl IntoView {
	let Some(initial) = Carousel::new(slides.len()) else {
		log::error!("carousel: no slides to show");
		return ().into_any();
	};
	let carousel = RwSignal::new(initial);
	let height = RwSignal::new(None::<i32>);
	let images: Vec<NodeRef<Img>> = slides.iter().map(|_| NodeRef::new()).collect();

	// Follow the current image height; images still loading report it from on:load.
	let images_fx = images.clone();
	Effect::new(move |_| {
		let Some(img) = images_fx[carousel.get().index()].get() else {
			return;
		};
		if img.complete() {
			height.set(Some(img.offset_height()));
		}
	});

	let slide_views = slides
		.iter()
		.zip(images)
		.enumerate()
		.map(|(i, (slide, img_ref))| {
			let on_load = move |_| {
				if carousel.get_untracked().index() != i {
					return;
				}
				if let Some(img) = img_ref.get_untracked() {
					height.set(Some(img.offset_height()));
				}
			};
			view! {
				<div class="slide">
					<img node_ref=img_ref src=slide.src alt=slide.alt on:load=on_load />
				</div>
			}
		})
		.collect_view();

	view! {
		<div
			class="slider-container"
			style:height=move || height.get().map(|h| format!("{h}px")).unwrap_or_default()
		>
			<div class="slider" style:transform=move || carousel.get().transform()>
				{slide_views}
			</div>
			<button class="prev" aria-label="Previous" on:click=move |_| carousel.update(Carousel::prev)>
				"❮"
			</button>
			<button class="next" aria-label="Next" on:click=move |_| carousel.update(Carousel::next)>
				"❯"
			</button>
		</div>
	}
	.into_any()
}
