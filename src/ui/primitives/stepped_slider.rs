//! Stepped vertical slider primitive
//!
//! A pill-shaped track with a circular dot that snaps to evenly spaced
//! levels. Progress 1 is at the top.
//!
//! # Design
//!
//! The widget owns no value. The host keeps a [`SteppedProgress`] and passes
//! it in on every view; accepted drags are reported through the `on_move`
//! callback with an already quantized value. The track is drawn by a canvas
//! child and the dot by a tinted SVG child, both laid out by this widget.

pub mod geometry;
pub mod gesture;

use iced::advanced::Renderer as _;
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::widget::Widget;
use iced::advanced::{Clipboard, Shell};
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::widget::{Canvas, svg};
use iced::{
    ContentFit, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme, Vector, mouse,
    touch, window,
};

use crate::features::stepping::{StepCount, SteppedProgress, Transition};
use crate::ui::animation::{Animated, dot_easing};
use crate::ui::{icons, theme};

use geometry::SliderGeometry;
use gesture::{DragGesture, Pointer};

/// Default widget width
pub const DEFAULT_WIDTH: f32 = 56.0;
/// Default widget height
pub const DEFAULT_HEIGHT: f32 = 280.0;

/// A vertical slider snapping to discrete steps
pub struct SteppedSlider<'a, Message> {
    step_count: StepCount,
    progress: f32,
    transition: Transition,
    on_move: Box<dyn Fn(f32) -> Message + 'a>,
    width: Length,
    height: Length,
    track: Element<'a, Message>,
    dot: Element<'a, Message>,
}

impl<'a, Message: 'a> SteppedSlider<'a, Message> {
    /// Creates a slider showing `progress`
    pub fn new<F>(progress: &SteppedProgress, on_move: F) -> Self
    where
        F: Fn(f32) -> Message + 'a,
    {
        Self {
            step_count: progress.step_count(),
            progress: progress.value(),
            transition: progress.transition(),
            on_move: Box::new(on_move),
            width: Length::Fixed(DEFAULT_WIDTH),
            height: Length::Fixed(DEFAULT_HEIGHT),
            track: Canvas::new(Track)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            dot: dot_view(svg::Handle::from_memory(icons::DOT.as_bytes())),
        }
    }

    /// Sets the stencil used to draw the dot
    pub fn dot_mask(mut self, mask: svg::Handle) -> Self {
        self.dot = dot_view(mask);
        self
    }

    /// Sets the width
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the height
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

/// Mask stretched over the dot frame and tinted
fn dot_view<'a, Message: 'a>(mask: svg::Handle) -> Element<'a, Message> {
    svg(mask)
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Fill)
        .style(|_theme, _status| svg::Style {
            color: Some(theme::DOT_TINT),
        })
        .into()
}

/// Widget tree state
#[derive(Debug)]
struct State {
    gesture: DragGesture,
    /// Displayed dot progress
    dot: Animated<f32>,
    /// Size seen by the last layout pass
    size: Option<Size>,
}

impl State {
    fn new(progress: f32) -> Self {
        Self {
            gesture: DragGesture::default(),
            dot: Animated::transition(progress, dot_easing()),
            size: None,
        }
    }

    /// Jump to `progress` without animating
    fn snap(&mut self, progress: f32) {
        self.dot = Animated::transition(progress, dot_easing());
    }

    /// Follow a new host value
    fn retarget(&mut self, progress: f32, transition: Transition) {
        if *self.dot.target() == progress {
            return;
        }
        match transition {
            Transition::Animated => self.dot.update(progress.into()),
            Transition::Immediate => self.snap(progress),
        }
    }

    fn displayed(&self) -> f32 {
        *self.dot.value()
    }

    /// Record the size of a layout pass
    ///
    /// A new size drops any drag and places the dot without animating.
    /// Returns whether the size changed.
    fn relayout(&mut self, size: Size, progress: f32) -> bool {
        if self.size == Some(size) {
            return false;
        }
        self.size = Some(size);
        self.gesture.reset();
        self.snap(progress);
        true
    }
}

impl<'a, Message> SteppedSlider<'a, Message> {
    fn press(
        &self,
        state: &mut State,
        pointer: Pointer,
        position: Point,
        geometry: &SliderGeometry,
        shell: &mut Shell<'_, Message>,
    ) {
        if state
            .gesture
            .press(pointer, position, geometry, self.progress)
        {
            tracing::trace!(?pointer, "slider drag started");
            shell.capture_event();
            shell.request_redraw();
        }
    }

    fn drag(
        &self,
        state: &mut State,
        pointer: Pointer,
        position: Point,
        geometry: &SliderGeometry,
        shell: &mut Shell<'_, Message>,
    ) {
        if let Some(raw) = state.gesture.drag(pointer, position, geometry) {
            let progress = self.step_count.quantize(raw);
            shell.publish((self.on_move)(progress));
            shell.capture_event();
        }
    }

    fn release(&self, state: &mut State, pointer: Pointer, shell: &mut Shell<'_, Message>) {
        if state.gesture.release(pointer) {
            shell.capture_event();
            shell.request_redraw();
        }
    }
}

impl<'a, Message> Widget<Message, Theme, Renderer> for SteppedSlider<'a, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new(self.progress))
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.track), Tree::new(&self.dot)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[&self.track, &self.dot]);
        tree.state
            .downcast_mut::<State>()
            .retarget(self.progress, self.transition);
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);
        let size = limits.resolve(self.width, self.height, Size::ZERO);

        let _ = tree
            .state
            .downcast_mut::<State>()
            .relayout(size, self.progress);

        let geometry = SliderGeometry::new(size);
        let diameter = geometry.dot_diameter();

        let track_node = self.track.as_widget_mut().layout(
            &mut tree.children[0],
            renderer,
            &layout::Limits::new(Size::ZERO, size),
        );
        let dot_node = self
            .dot
            .as_widget_mut()
            .layout(
                &mut tree.children[1],
                renderer,
                &layout::Limits::new(Size::ZERO, Size::new(diameter, diameter)),
            )
            .move_to(geometry.dot_frame(self.progress).position());

        layout::Node::with_children(size, vec![track_node, dot_node])
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();
        let geometry = SliderGeometry::new(bounds.size());
        let local = |position: Point| position - Vector::new(bounds.x, bounds.y);

        match event {
            Event::Window(window::Event::RedrawRequested(now)) => {
                state.dot.tick(*now);
                if state.dot.is_animating() {
                    shell.request_redraw();
                }
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    self.press(state, Pointer::Mouse, local(position), &geometry, shell);
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if bounds.contains(*position) {
                    self.press(state, Pointer::Finger(*id), local(*position), &geometry, shell);
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.drag(state, Pointer::Mouse, local(*position), &geometry, shell);
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                self.drag(state, Pointer::Finger(*id), local(*position), &geometry, shell);
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.release(state, Pointer::Mouse, shell);
            }
            Event::Touch(touch::Event::FingerLifted { id, .. })
            | Event::Touch(touch::Event::FingerLost { id, .. }) => {
                self.release(state, Pointer::Finger(*id), shell);
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let geometry = SliderGeometry::new(layout.bounds().size());
        let mut children = layout.children();

        if let Some(track_layout) = children.next() {
            self.track.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                track_layout,
                cursor,
                viewport,
            );
        }

        if let Some(dot_layout) = children.next() {
            // The dot is laid out at its target; shift it to where the animation is
            let offset = geometry.dot_frame(state.displayed()).y
                - geometry.dot_frame(self.progress).y;

            renderer.with_translation(Vector::new(0.0, offset), |renderer| {
                self.dot.as_widget().draw(
                    &tree.children[1],
                    renderer,
                    theme,
                    style,
                    dot_layout,
                    cursor,
                    viewport,
                );
            });
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let geometry = SliderGeometry::new(bounds.size());

        if state.gesture.is_tracking() {
            return mouse::Interaction::Grabbing;
        }

        match cursor.position_over(bounds) {
            Some(position)
                if geometry.hits_dot(position - Vector::new(bounds.x, bounds.y), self.progress) =>
            {
                mouse::Interaction::Grab
            }
            _ => mouse::Interaction::default(),
        }
    }
}

impl<'a, Message: 'a> From<SteppedSlider<'a, Message>> for Element<'a, Message> {
    fn from(slider: SteppedSlider<'a, Message>) -> Self {
        Element::new(slider)
    }
}

/// Canvas program drawing the stadium-shaped track
#[derive(Debug, Clone, Copy)]
struct Track;

impl<Message> Program<Message> for Track {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let path = track_path(bounds.size());

        frame.fill(&path, theme::TRACK);
        frame.stroke(
            &path,
            Stroke::default().with_width(1.0).with_color(theme::TRACK),
        );

        vec![frame.into_geometry()]
    }
}

/// Vertical stadium filling `size`, as a single closed subpath
fn track_path(size: Size) -> Path {
    let radius = SliderGeometry::new(size).track_radius();
    Path::rounded_rectangle(Point::ORIGIN, size, radius.into())
}

/// Creates a new stepped slider
pub fn stepped_slider<'a, Message: 'a>(
    progress: &SteppedProgress,
    on_move: impl Fn(f32) -> Message + 'a,
) -> SteppedSlider<'a, Message> {
    SteppedSlider::new(progress, on_move)
}
