//! Pure geometry behind connector drawing.

use std::f64::consts::PI;

/// Length of each arrowhead barb.
pub const ARROW_HEAD_LENGTH: f64 = 10.0;
/// Angle between the shaft and each barb.
pub const ARROW_HEAD_ANGLE: f64 = PI / 6.0;

/// A position in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal, growing rightwards
	pub x: f64,
	/// Vertical, growing downwards
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Axis-aligned rectangle, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	/// Left edge
	pub left: f64,
	/// Top edge
	pub top: f64,
	/// Horizontal extent
	pub width: f64,
	/// Vertical extent
	pub height: f64,
}

impl Rect {
	/// Rectangle from its top-left corner and size.
	pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			left,
			top,
			width,
			height,
		}
	}

	/// Midpoint of the rectangle.
	pub fn center(&self) -> Point {
		Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
	}

	/// Re-expresses the rectangle with `origin` as (0, 0).
	pub fn relative_to(&self, origin: Point) -> Rect {
		Rect::new(
			self.left - origin.x,
			self.top - origin.y,
			self.width,
			self.height,
		)
	}
}

/// Vertices of a connector: the shaft runs `tail -> tip`, the head is the
/// triangle `tip, left, right`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowPath {
	/// Start of the shaft
	pub tail: Point,
	/// End of the shaft, where the head points
	pub tip: Point,
	/// Barb at angle `-ARROW_HEAD_ANGLE`
	pub left: Point,
	/// Barb at angle `+ARROW_HEAD_ANGLE`
	pub right: Point,
}

impl ArrowPath {
	/// The filled head triangle.
	pub fn head(&self) -> [Point; 3] {
		[self.tip, self.left, self.right]
	}
}

/// Shaft and head vertices for a connector pointing at `to`.
pub fn arrow_path(from: Point, to: Point) -> ArrowPath {
	let angle = (to.y - from.y).atan2(to.x - from.x);
	let barb = |offset: f64| {
		Point::new(
			to.x - ARROW_HEAD_LENGTH * (angle + offset).cos(),
			to.y - ARROW_HEAD_LENGTH * (angle + offset).sin(),
		)
	};
	ArrowPath {
		tail: from,
		tip: to,
		left: barb(-ARROW_HEAD_ANGLE),
		right: barb(ARROW_HEAD_ANGLE),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: Point, b: Point) -> bool {
		(a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
	}

	#[test]
	fn center_is_midpoint() {
		let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
		assert_eq!(rect.center(), Point::new(60.0, 40.0));
	}

	#[test]
	fn relative_to_shifts_origin_only() {
		let rect = Rect::new(110.0, 70.0, 50.0, 30.0).relative_to(Point::new(100.0, 50.0));
		assert_eq!(rect, Rect::new(10.0, 20.0, 50.0, 30.0));
		assert_eq!(rect.center(), Point::new(35.0, 35.0));
	}

	#[test]
	fn horizontal_arrowhead_uses_fixed_length_and_angle() {
		let path = arrow_path(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
		let dx = 100.0 - 10.0 * (PI / 6.0).cos();
		assert!(close(path.tip, Point::new(100.0, 0.0)));
		assert!(close(path.left, Point::new(dx, 5.0)));
		assert!(close(path.right, Point::new(dx, -5.0)));
		assert!((path.left.x - 91.34).abs() < 0.01);
	}

	#[test]
	fn barbs_trail_the_tip_for_any_direction() {
		let from = Point::new(40.0, 40.0);
		let to = Point::new(10.0, 80.0);
		let path = arrow_path(from, to);
		for barb in [path.left, path.right] {
			let len = ((barb.x - to.x).powi(2) + (barb.y - to.y).powi(2)).sqrt();
			assert!((len - ARROW_HEAD_LENGTH).abs() < 1e-9);
			// Barbs sit on the tail side of the tip.
			let along = (barb.x - to.x) * (from.x - to.x) + (barb.y - to.y) * (from.y - to.y);
			assert!(along > 0.0);
		}
	}
}
