//! Node-link diagram editor: boxes, parent/child edges and the canvas
//! connectors drawn between them.

mod component;
pub mod controller;
pub mod geometry;
mod render;
pub mod store;
pub mod surface;

pub use component::DiagramEditor;
pub use controller::{DiagramController, DomLayout, NodeLayout};
pub use render::draw_arrow;
pub use store::{NodeId, RelationshipStore};
pub use surface::{CanvasSurface, Surface};
