//! Layout math for the stepped slider
//!
//! All coordinates are local to the widget: `(0, 0)` is the top-left corner
//! of its bounds and `y` grows downwards.

use iced::{Point, Rectangle, Size};

/// Dot side relative to the widget width
pub const DOT_SCALE: f32 = 0.8;

/// Geometry of a stepped slider laid out in a given size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    size: Size,
}

impl SliderGeometry {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// Side length of the square dot
    pub fn dot_diameter(&self) -> f32 {
        DOT_SCALE * self.size.width
    }

    /// Gap between the dot and the track edge
    pub fn margin(&self) -> f32 {
        (self.size.width - self.dot_diameter()) / 2.0
    }

    /// Vertical distance the dot's top edge can move
    pub fn travel(&self) -> f32 {
        self.size.height - self.dot_diameter() - 2.0 * self.margin()
    }

    /// Dot frame for a progress value; progress 1 sits at the top
    pub fn dot_frame(&self, progress: f32) -> Rectangle {
        let margin = self.margin();
        let diameter = self.dot_diameter();
        Rectangle {
            x: margin,
            y: margin + (1.0 - progress) * self.travel(),
            width: diameter,
            height: diameter,
        }
    }

    pub fn dot_center(&self, progress: f32) -> Point {
        self.dot_frame(progress).center()
    }

    /// Whether `point` lies strictly inside the circular dot
    pub fn hits_dot(&self, point: Point, progress: f32) -> bool {
        point.distance(self.dot_center(progress)) < self.dot_diameter() / 2.0
    }

    /// Map a vertical position to an unquantized progress value
    ///
    /// Returns `None` when the track leaves the dot no room to move.
    pub fn progress_at(&self, y: f32) -> Option<f32> {
        let upper = self.margin() + self.dot_diameter() / 2.0;
        let lower = self.size.height - upper;
        if lower <= upper {
            return None;
        }
        Some((1.0 - (y - upper) / (lower - upper)).clamp(0.0, 1.0))
    }

    /// Corner radius that turns the track rectangle into a vertical stadium
    pub fn track_radius(&self) -> f32 {
        self.size.width / 2.0
    }
}
