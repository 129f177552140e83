//! Drawing surface the connectors land on, sized to the diagram container.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::geometry::Point;
use crate::error::PageError;

/// Pixel-addressable target the connectors are drawn onto.
pub trait Surface {
	/// Pixel buffer size as `(width, height)`.
	fn size(&self) -> (u32, u32);
	/// Replaces the pixel buffer; its content is lost.
	fn set_size(&mut self, width: u32, height: u32);
	/// Erases the whole buffer.
	fn clear(&mut self);
	/// Strokes a straight segment.
	fn stroke_line(&mut self, from: Point, to: Point, color: &str, width: f64);
	/// Fills the closed polygon through `points`.
	fn fill_polygon(&mut self, points: &[Point], color: &str);
}

/// Sizes the pixel buffer to the container's client box. No DPR scaling.
pub fn resize(surface: &mut impl Surface, width: f64, height: f64) {
	let (w, h) = (width.max(0.0) as u32, height.max(0.0) as u32);
	log::debug!("diagram surface resized to {w}x{h}");
	surface.set_size(w, h);
}

/// [`Surface`] over a `<canvas>` 2d context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Fails when the canvas has no 2d context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, PageError> {
		let ctx = canvas
			.get_context("2d")?
			.ok_or(PageError::NoContext)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| PageError::NoContext)?;
		Ok(Self { canvas, ctx })
	}

	/// Resizes to the canvas' parent element, the diagram container.
	pub fn fit_to_parent(&mut self) {
		let (w, h) = self
			.canvas
			.parent_element()
			.map(|p| (p.client_width() as f64, p.client_height() as f64))
			.unwrap_or_default();
		resize(self, w, h);
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> (u32, u32) {
		(self.canvas.width(), self.canvas.height())
	}

	fn set_size(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn clear(&mut self) {
		let (w, h) = self.size();
		self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
	}

	fn stroke_line(&mut self, from: Point, to: Point, color: &str, width: f64) {
		self.ctx.begin_path();
		self.ctx.move_to(from.x, from.y);
		self.ctx.line_to(to.x, to.y);
		self.ctx.set_stroke_style_str(color);
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}

	fn fill_polygon(&mut self, points: &[Point], color: &str) {
		let Some((first, rest)) = points.split_first() else {
			return;
		};
		self.ctx.begin_path();
		self.ctx.move_to(first.x, first.y);
		for p in rest {
			self.ctx.line_to(p.x, p.y);
		}
		self.ctx.close_path();
		self.ctx.set_fill_style_str(color);
		self.ctx.fill();
	}
}


#[cfg(test)]
mod tests {
	use super::recording::RecordingSurface;
	use super::*;

	#[test]
	fn resize_matches_container_exactly() {
		let mut surface = RecordingSurface::default();
		resize(&mut surface, 640.0, 480.0);
		assert_eq!(surface.size(), (640, 480));
	}

	#[test]
	fn resize_is_idempotent() {
		let mut surface = RecordingSurface::default();
		resize(&mut surface, 300.5, 200.9);
		let first = surface.size();
		resize(&mut surface, 300.5, 200.9);
		assert_eq!(surface.size(), first);
		assert_eq!(first, (300, 200));
	}

	#[test]
	fn zero_sized_container_gives_zero_buffer() {
		let mut surface = RecordingSurface::default();
		resize(&mut surface, 0.0, -4.0);
		assert_eq!(surface.size(), (0, 0));
	}
}
