use web_sys::Element;

use super::geometry::{Point, Rect};
use super::render::draw_arrow;
use super::store::{NodeId, RelationshipStore};
use super::surface::Surface;

/// Attribute carrying a box's [`NodeId`] in the DOM.
pub const NODE_ID_ATTR: &str = "data-node-id";
/// Class of the "create child" button inside each box.
pub const ADD_BUTTON_CLASS: &str = "add-btn";
/// Class of a diagram box.
pub const NODE_CLASS: &str = "diagram-box";

/// Resolves the box owning a clicked "create child" button.
///
/// `None` unless `target` is an `add-btn` inside a box carrying a valid
/// [`NODE_ID_ATTR`].
pub fn affordance_parent(target: &Element) -> Option<NodeId> {
	if !target.class_list().contains(ADD_BUTTON_CLASS) {
		return None;
	}
	target
		.closest(&format!(".{NODE_CLASS}"))
		.ok()
		.flatten()?
		.get_attribute(NODE_ID_ATTR)?
		.parse()
		.ok()
		.map(NodeId)
}

/// Where node boxes currently sit on screen.
pub trait NodeLayout {
	/// Viewport rectangle of the node, `None` if it is not in the document.
	fn node_rect(&self, id: NodeId) -> Option<Rect>;
	/// Viewport position of the container's top-left corner.
	fn container_origin(&self) -> Point;

	/// Center of the node in container coordinates.
	fn node_center(&self, id: NodeId) -> Option<Point> {
		let origin = self.container_origin();
		self.node_rect(id).map(|r| r.relative_to(origin).center())
	}
}

/// Reads node rectangles from live layout inside the diagram container.
pub struct DomLayout {
	container: Element,
}

impl DomLayout {
	/// Looks nodes up among the descendants of `container`.
	pub fn new(container: Element) -> Self {
		Self { container }
	}
}

impl NodeLayout for DomLayout {
	fn node_rect(&self, id: NodeId) -> Option<Rect> {
		let selector = format!("[{NODE_ID_ATTR}=\"{id}\"]");
		let node = self.container.query_selector(&selector).ok().flatten()?;
		let r = node.get_bounding_client_rect();
		Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
	}

	fn container_origin(&self) -> Point {
		let r = self.container.get_bounding_client_rect();
		Point::new(r.left(), r.top())
	}
}

/// Owns the diagram's nodes and edges and turns them into connectors.
pub struct DiagramController {
	store: RelationshipStore,
	nodes: Vec<NodeId>,
	next_id: u32,
}

impl DiagramController {
	/// Empty diagram over an explicitly owned store.
	pub fn new(store: RelationshipStore) -> Self {
		Self {
			store,
			nodes: Vec::new(),
			next_id: 0,
		}
	}

	fn allocate(&mut self) -> NodeId {
		let id = NodeId(self.next_id);
		self.next_id += 1;
		self.nodes.push(id);
		id
	}

	/// Adds a node with no parent, as found in the initial markup.
	pub fn create_root(&mut self) -> NodeId {
		self.allocate()
	}

	/// Appends a new box to the container and links it under `parent`.
	pub fn spawn_child(&mut self, parent: NodeId) -> NodeId {
		let child = self.allocate();
		self.store.add_child(parent, child);
		log::info!("diagram: spawned node {child} under {parent}");
		child
	}

	/// Handles a click inside the container: spawns a child when `target` is
	/// a box's "create child" button.
	pub fn spawn_from_click(&mut self, target: &Element) -> Option<NodeId> {
		affordance_parent(target).map(|parent| self.spawn_child(parent))
	}

	/// Boxes in container order.
	pub fn nodes(&self) -> &[NodeId] {
		&self.nodes
	}

	/// Recorded edges.
	pub fn store(&self) -> &RelationshipStore {
		&self.store
	}

	/// Clears the surface and draws one arrow per recorded edge, center to
	/// center. Edges with an unresolvable endpoint are skipped.
	pub fn redraw(&self, surface: &mut impl Surface, layout: &impl NodeLayout) -> usize {
		surface.clear();
		let mut drawn = 0;
		for (parent, children) in self.store.iter() {
			let Some(from) = layout.node_center(parent) else {
				log::warn!(
					"diagram: parent {parent} not in layout, skipping {} edge(s)",
					children.len()
				);
				continue;
			};
			for &child in children {
				let Some(to) = layout.node_center(child) else {
					log::warn!("diagram: child {child} not in layout, skipping edge");
					continue;
				};
				draw_arrow(surface, from, to);
				drawn += 1;
			}
		}
		log::debug!("diagram: redrew {drawn} connector(s)");
		drawn
	}
}

impl Default for DiagramController {
	fn default() -> Self {
		Self::new(RelationshipStore::new())
	}
}
