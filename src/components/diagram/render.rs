use super::geometry::{Point, arrow_path};
use super::surface::Surface;

pub const ARROW_COLOR: &str = "blue";
pub const ARROW_LINE_WIDTH: f64 = 2.0;

/// Draws the shaft `from -> to` and a filled head at `to`. Does not clear.
pub fn draw_arrow(surface: &mut impl Surface, from: Point, to: Point) {
	let path = arrow_path(from, to);
	surface.stroke_line(path.tail, path.tip, ARROW_COLOR, ARROW_LINE_WIDTH);
	surface.fill_polygon(&path.head(), ARROW_COLOR);
}
