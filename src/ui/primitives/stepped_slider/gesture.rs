//! Drag gesture state machine for the stepped slider
//!
//! A gesture is owned by the first pointer that goes down on the widget.
//! It only tracks movement when that press landed on the dot; any other
//! pointer is ignored until the owner is released.

use iced::Point;
use iced::touch::Finger;

use super::geometry::SliderGeometry;

/// Input device driving a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Mouse,
    Finger(Finger),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Tracking,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DragGesture {
    owner: Option<Pointer>,
    phase: Phase,
}

impl DragGesture {
    pub fn is_tracking(&self) -> bool {
        self.phase == Phase::Tracking
    }

    /// Start a pointer sequence at a widget-local `position`
    ///
    /// Returns `true` when the press landed on the dot and movement will be
    /// tracked.
    pub fn press(
        &mut self,
        pointer: Pointer,
        position: Point,
        geometry: &SliderGeometry,
        progress: f32,
    ) -> bool {
        if self.owner.is_some_and(|owner| owner != pointer) {
            return false;
        }

        self.owner = Some(pointer);
        self.phase = if geometry.hits_dot(position, progress) {
            Phase::Tracking
        } else {
            Phase::Idle
        };
        self.is_tracking()
    }

    /// Unquantized progress for a move of the owning pointer
    pub fn drag(
        &self,
        pointer: Pointer,
        position: Point,
        geometry: &SliderGeometry,
    ) -> Option<f32> {
        if self.owner != Some(pointer) || !self.is_tracking() {
            return None;
        }
        geometry.progress_at(position.y)
    }

    /// End the sequence of `pointer`; returns whether it was tracking
    pub fn release(&mut self, pointer: Pointer) -> bool {
        if self.owner != Some(pointer) {
            return false;
        }
        let was_tracking = self.is_tracking();
        self.reset();
        was_tracking
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::stepping::StepCount;
    use iced::Size;

    fn geometry() -> SliderGeometry {
        SliderGeometry::new(Size::new(50.0, 250.0))
    }

    fn finger(id: u64) -> Pointer {
        Pointer::Finger(Finger(id))
    }

    /// Drive a gesture the way the widget does and collect published values
    fn drag_sequence(start: Point, moves: &[Point], progress: f32) -> Vec<f32> {
        let g = geometry();
        let steps = StepCount::new(5.0).unwrap();
        let mut gesture = DragGesture::default();
        let mut published = Vec::new();

        gesture.press(Pointer::Mouse, start, &g, progress);
        for position in moves {
            if let Some(raw) = gesture.drag(Pointer::Mouse, *position, &g) {
                published.push(steps.quantize(raw));
            }
        }
        gesture.release(Pointer::Mouse);
        published
    }

    #[test]
    fn press_outside_dot_ignores_moves() {
        let g = geometry();
        // Dot sits at the bottom; press near the top of the track
        let published = drag_sequence(Point::new(25.0, 20.0), &[Point::new(25.0, 0.0)], 0.0);
        assert!(published.is_empty());

        let mut gesture = DragGesture::default();
        assert!(!gesture.press(Pointer::Mouse, Point::new(25.0, 20.0), &g, 0.0));
        assert!(!gesture.is_tracking());
    }

    #[test]
    fn drag_to_top_publishes_one_once() {
        let g = geometry();
        let start = g.dot_center(0.0);
        let published = drag_sequence(start, &[Point::new(25.0, -40.0)], 0.0);
        assert_eq!(published, vec![1.0]);
    }

    #[test]
    fn every_move_is_published() {
        let g = geometry();
        let start = g.dot_center(0.5);
        let moves = [g.dot_center(0.5), g.dot_center(0.55), g.dot_center(0.75)];
        let published = drag_sequence(start, &moves, 0.5);
        assert_eq!(published, vec![0.5, 0.5, 0.75]);
    }

    #[test]
    fn second_finger_is_ignored() {
        let g = geometry();
        let mut gesture = DragGesture::default();

        // First finger misses the dot, second lands on it
        assert!(!gesture.press(finger(1), Point::new(25.0, 20.0), &g, 0.0));
        assert!(!gesture.press(finger(2), g.dot_center(0.0), &g, 0.0));
        assert_eq!(gesture.drag(finger(2), Point::new(25.0, 0.0), &g), None);

        // Lifting the second finger does not end the first sequence
        assert!(!gesture.release(finger(2)));
        assert!(!gesture.release(finger(1)));

        // Once released, a new finger can take over
        assert!(gesture.press(finger(2), g.dot_center(0.0), &g, 0.0));
        assert_eq!(gesture.drag(finger(2), Point::new(25.0, 0.0), &g), Some(1.0));
    }

    #[test]
    fn moves_from_other_pointers_are_ignored_while_tracking() {
        let g = geometry();
        let mut gesture = DragGesture::default();
        assert!(gesture.press(finger(7), g.dot_center(0.0), &g, 0.0));
        assert_eq!(gesture.drag(Pointer::Mouse, Point::new(25.0, 0.0), &g), None);
        assert_eq!(gesture.drag(finger(8), Point::new(25.0, 0.0), &g), None);
        assert!(gesture.drag(finger(7), Point::new(25.0, 0.0), &g).is_some());
    }

    #[test]
    fn release_returns_to_idle() {
        let g = geometry();
        let mut gesture = DragGesture::default();
        assert!(gesture.press(Pointer::Mouse, g.dot_center(0.0), &g, 0.0));
        assert!(gesture.release(Pointer::Mouse));
        assert!(!gesture.is_tracking());
        assert_eq!(gesture.drag(Pointer::Mouse, Point::new(25.0, 0.0), &g), None);
    }

    #[test]
    fn reset_clears_tracking() {
        let g = geometry();
        let mut gesture = DragGesture::default();
        gesture.press(Pointer::Mouse, g.dot_center(0.0), &g, 0.0);
        gesture.reset();
        assert!(!gesture.is_tracking());
        assert_eq!(gesture.drag(Pointer::Mouse, Point::new(25.0, 0.0), &g), None);
    }
}
