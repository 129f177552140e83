//! Navigation bar: smooth scrolling on click and scroll-spy highlighting.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::content::Section;
use crate::error::{PageError, element_by_id};

/// A section becomes current this many pixels before its top reaches the viewport top.
pub const SCROLL_SPY_OFFSET: f64 = 60.0;

/// Picks the last section (document order) whose top has been scrolled past.
pub fn active_section<'a>(
	offsets: impl IntoIterator<Item = (&'a str, f64)>,
	scroll_y: f64,
) -> Option<&'a str> {
	offsets
		.into_iter()
		.filter(|&(_, top)| scroll_y >= top - SCROLL_SPY_OFFSET)
		.map(|(id, _)| id)
		.last()
}

fn section_top(id: &str) -> Option<f64> {
	element_by_id(id)
		.ok()
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		.map(|el| el.offset_top() as f64)
}

fn scroll_to(id: &str) -> Result<(), PageError> {
	let target = element_by_id(id)?;
	let opts = ScrollIntoViewOptions::new();
	opts.set_behavior(ScrollBehavior::Smooth);
	target.scroll_into_view_with_scroll_into_view_options(&opts);
	Ok(())
}

#[component]
pub fn SectionNav(sections: &'static [Section]) -> impl IntoView {
	let current = RwSignal::new(None::<&'static str>);

	let handle = window_event_listener(ev::scroll, move |_| {
		let scroll_y = window().scroll_y().unwrap_or(0.0);
		let offsets = sections
			.iter()
			.filter_map(|s| section_top(s.id).map(|top| (s.id, top)));
		current.set(active_section(offsets, scroll_y));
	});
	on_cleanup(move || handle.remove());

	let links = sections
		.iter()
		.map(|section| {
			let id = section.id;
			let on_click = move |ev: MouseEvent| {
				ev.prevent_default();
				match scroll_to(id) {
					Ok(()) => current.set(Some(id)),
					Err(err) => log::warn!("nav: {err}"),
				}
			};
			view! {
				<li>
					<a
						href=format!("#{id}")
						aria-current=move || (current.get() == Some(id)).then_some("page")
						on:click=on_click
					>
						{section.title}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<nav>
			<ul>{links}</ul>
		</nav>
	}
}
