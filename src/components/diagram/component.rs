use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement, MouseEvent};

use super::controller::{ADD_BUTTON_CLASS, DiagramController, DomLayout, NODE_CLASS};
use super::store::{NodeId, RelationshipStore};
use super::surface::CanvasSurface;

/// Canvas and layout, available once the container is mounted.
struct Mounted {
	surface: CanvasSurface,
	layout: DomLayout,
}

/// Node-link diagram: boxes spawn children through their `+` button and a
/// canvas overlay connects every parent to its children.
#[component]
pub fn DiagramEditor(
	/// Parentless boxes present before any click.
	#[prop(default = 1)]
	roots: usize,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	let controller = Rc::new(RefCell::new(DiagramController::new(
		RelationshipStore::new(),
	)));
	for _ in 0..roots {
		controller.borrow_mut().create_root();
	}
	let nodes = RwSignal::new(controller.borrow().nodes().to_vec());

	let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));

	// Re-sizes the canvas to the container, then redraws every connector.
	let refresh: Rc<dyn Fn()> = {
		let (controller, mounted) = (controller.clone(), mounted.clone());
		Rc::new(move || {
			if let Some(ref mut m) = *mounted.borrow_mut() {
				m.surface.fit_to_parent();
				controller.borrow().redraw(&mut m.surface, &m.layout);
			}
		})
	};

	let (mounted_init, refresh_init) = (mounted.clone(), refresh.clone());
	Effect::new(move |_| {
		let (Some(container), Some(canvas)) = (container_ref.get(), canvas_ref.get()) else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let container: Element = container.into();

		let surface = match CanvasSurface::new(canvas) {
			Ok(surface) => surface,
			Err(err) => {
				log::error!("diagram disabled: {err}");
				return;
			}
		};
		*mounted_init.borrow_mut() = Some(Mounted {
			surface,
			layout: DomLayout::new(container),
		});
		refresh_init();
	});

	let refresh_resize = refresh.clone();
	let handle = window_event_listener(ev::resize, move |_| refresh_resize());
	on_cleanup(move || handle.remove());

	let on_click = move |ev: MouseEvent| {
		let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
			return;
		};
		if controller.borrow_mut().spawn_from_click(&target).is_none() {
			return;
		}
		nodes.set(controller.borrow().nodes().to_vec());

		// The new box must be laid out before the canvas and its rectangle are read.
		let refresh = refresh.clone();
		request_animation_frame(move || refresh());
	};

	view! {
		<div
			node_ref=container_ref
			class="diagram-container"
			on:click=on_click
			style="position: relative;"
		>
			<canvas
				node_ref=canvas_ref
				id="diagram-canvas"
				style="position: absolute; top: 0; left: 0; pointer-events: none;"
			/>
			<For
				each=move || nodes.get()
				key=|id| *id
				children=move |id| view! { <DiagramBox id=id /> }
			/>
		</div>
	}
}

#[component]
fn DiagramBox(id: NodeId) -> impl IntoView {
	view! {
		<div class=NODE_CLASS data-node-id=id.to_string()>
			<input type="text" placeholder="Titre" />
			<textarea placeholder="Description"></textarea>
			<button class=ADD_BUTTON_CLASS>"+"</button>
		</div>
	}
}
