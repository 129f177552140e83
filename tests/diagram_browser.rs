#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use vitrine::components::diagram::controller::{
	ADD_BUTTON_CLASS, NODE_CLASS, NODE_ID_ATTR, affordance_parent,
};
use vitrine::components::diagram::surface::resize;
use vitrine::components::diagram::{
	CanvasSurface, DiagramController, DiagramEditor, DomLayout, NodeId, NodeLayout, Surface,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn doc() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn container(width: u32, height: u32) -> Element {
	let container = doc().create_element("div").unwrap();
	container
		.set_attribute(
			"style",
			&format!("position: absolute; left: 20px; top: 30px; width: {width}px; height: {height}px;"),
		)
		.unwrap();
	doc().body().unwrap().append_child(&container).unwrap();
	container
}

/// Appends a box laid out like the editor's, returning it.
fn add_box(container: &Element, id: &str, left: u32, top: u32) -> Element {
	let node = doc().create_element("div").unwrap();
	node.set_class_name(NODE_CLASS);
	node.set_attribute(NODE_ID_ATTR, id).unwrap();
	node.set_attribute(
		"style",
		&format!("position: absolute; left: {left}px; top: {top}px; width: 40px; height: 20px;"),
	)
	.unwrap();
	node.set_inner_html(&format!(
		r#"<input type="text" placeholder="Titre"><textarea placeholder="Description"></textarea><button class="{ADD_BUTTON_CLASS}">+</button>"#
	));
	container.append_child(&node).unwrap();
	node
}

fn find(root: &Element, selector: &str) -> Element {
	root.query_selector(selector).unwrap().unwrap()
}

fn canvas_in(container: &Element) -> HtmlCanvasElement {
	let canvas: HtmlCanvasElement = doc().create_element("canvas").unwrap().dyn_into().unwrap();
	container.append_child(&canvas).unwrap();
	canvas
}

async fn next_frame() {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		web_sys::window()
			.unwrap()
			.request_animation_frame(&resolve)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn canvas_tracks_container_size() {
	let container = container(320, 180);
	let mut surface = CanvasSurface::new(canvas_in(&container)).unwrap();

	surface.fit_to_parent();
	assert_eq!(surface.size(), (320, 180));
	surface.fit_to_parent();
	assert_eq!(surface.size(), (320, 180));

	container
		.dyn_ref::<HtmlElement>()
		.unwrap()
		.style()
		.set_property("width", "200px")
		.unwrap();
	surface.fit_to_parent();
	assert_eq!(surface.size(), (200, 180));

	resize(&mut surface, 0.0, 0.0);
	assert_eq!(surface.size(), (0, 0));
}

#[wasm_bindgen_test]
fn layout_reports_container_relative_centers() {
	let container = container(400, 300);
	add_box(&container, "7", 60, 40);
	let layout = DomLayout::new(container);

	let center = layout.node_center(NodeId(7)).unwrap();
	assert!((center.x - 80.0).abs() < 0.5);
	assert!((center.y - 50.0).abs() < 0.5);
	assert!(layout.node_rect(NodeId(8)).is_none());
}

#[wasm_bindgen_test]
fn add_button_resolves_to_its_box() {
	let container = container(400, 300);
	let node = add_box(&container, "3", 10, 10);
	let button = find(&node, ".add-btn");

	assert_eq!(affordance_parent(&button), Some(NodeId(3)));
}

#[wasm_bindgen_test]
fn clicks_outside_add_buttons_resolve_to_nothing() {
	let container = container(400, 300);
	let node = add_box(&container, "3", 10, 10);

	assert_eq!(affordance_parent(&find(&node, "input")), None);
	assert_eq!(affordance_parent(&find(&node, "textarea")), None);
	assert_eq!(affordance_parent(&node), None);
	assert_eq!(affordance_parent(&container), None);

	// A stray button outside any box, and a box without a usable id.
	let stray = doc().create_element("button").unwrap();
	stray.set_class_name(ADD_BUTTON_CLASS);
	container.append_child(&stray).unwrap();
	assert_eq!(affordance_parent(&stray), None);

	let broken = add_box(&container, "root", 100, 10);
	assert_eq!(affordance_parent(&find(&broken, ".add-btn")), None);
}

#[wasm_bindgen_test]
fn click_on_root_button_links_a_new_box() {
	let container = container(400, 300);
	let mut surface = CanvasSurface::new(canvas_in(&container)).unwrap();
	surface.fit_to_parent();

	let mut controller = DiagramController::default();
	let root = controller.create_root();
	let root_box = add_box(&container, &root.to_string(), 10, 10);

	let child = controller
		.spawn_from_click(&find(&root_box, ".add-btn"))
		.unwrap();
	add_box(&container, &child.to_string(), 200, 150);

	assert_eq!(container.query_selector_all(".diagram-box").unwrap().length(), 2);
	assert_eq!(controller.nodes(), &[root, child]);
	assert_eq!(controller.store().parent_count(), 1);
	assert_eq!(controller.store().children(root), &[child]);
	assert_eq!(controller.redraw(&mut surface, &DomLayout::new(container)), 1);
}

#[wasm_bindgen_test]
fn click_on_input_spawns_nothing() {
	let container = container(400, 300);
	let mut controller = DiagramController::default();
	let root = controller.create_root();
	let root_box = add_box(&container, &root.to_string(), 10, 10);

	assert_eq!(controller.spawn_from_click(&find(&root_box, "input")), None);
	assert!(controller.store().is_empty());
	assert_eq!(controller.nodes(), &[root]);
}

#[wasm_bindgen_test]
fn redraw_draws_one_connector_per_resolved_edge() {
	let container = container(400, 300);
	let mut surface = CanvasSurface::new(canvas_in(&container)).unwrap();
	surface.fit_to_parent();

	let mut controller = DiagramController::default();
	let root = controller.create_root();
	let child = controller.spawn_child(root);
	let _detached = controller.spawn_child(root);
	add_box(&container, &root.to_string(), 10, 10);
	add_box(&container, &child.to_string(), 200, 150);

	let layout = DomLayout::new(container);
	assert_eq!(controller.redraw(&mut surface, &layout), 1);
}

#[wasm_bindgen_test]
async fn editor_spawns_box_and_refits_canvas() {
	let host: HtmlElement = doc().create_element("div").unwrap().dyn_into().unwrap();
	doc().body().unwrap().append_child(&host).unwrap();
	let _app = leptos::mount::mount_to(host.clone(), || view! { <DiagramEditor /> });
	next_frame().await;

	let diagram = find(&host, ".diagram-container");
	let canvas: HtmlCanvasElement = find(&diagram, "canvas").dyn_into().unwrap();
	assert_eq!(diagram.query_selector_all(".diagram-box").unwrap().length(), 1);

	find(&diagram, ".add-btn")
		.dyn_into::<HtmlElement>()
		.unwrap()
		.click();
	next_frame().await;
	next_frame().await;

	let boxes = diagram.query_selector_all(".diagram-box").unwrap();
	assert_eq!(boxes.length(), 2);
	let ids: Vec<_> = (0..2)
		.map(|i| {
			boxes
				.item(i)
				.unwrap()
				.dyn_into::<Element>()
				.unwrap()
				.get_attribute(NODE_ID_ATTR)
				.unwrap()
		})
		.collect();
	assert_eq!(ids, ["0", "1"]);

	// Boxes stack, so the container grew; the canvas followed it.
	assert_eq!(canvas.width(), diagram.client_width() as u32);
	assert_eq!(canvas.height(), diagram.client_height() as u32);

	// The connector passes between the two box centers.
	let layout = DomLayout::new(diagram.clone());
	let (from, to) = (
		layout.node_center(NodeId(0)).unwrap(),
		layout.node_center(NodeId(1)).unwrap(),
	);
	let (mx, my) = ((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	let pixels = ctx.get_image_data(mx - 2.0, my - 2.0, 5.0, 5.0).unwrap().data();
	assert!(pixels.chunks(4).any(|rgba| rgba[3] > 0));
}
