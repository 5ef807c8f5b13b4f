//! Widget-side state: the current color, the three marker positions, and the
//! drag machine, tied together behind the routing outcomes the floem shell
//! acts on.

use floem::kurbo::Point;

use crate::color::{BarColor, Channel};
use crate::drag::{DragController, PointerPhase, Routing};
use crate::geometry::{self, Marker};

/// What the shell should do with an event after routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The event was claimed; repaint, and notify observers when `notify`.
    Claimed { notify: bool },
    /// Unclaimed but inside the client area; consume it anyway.
    Swallowed,
    /// Outside the client area; let ancestors see the event untouched.
    Passed,
}

#[cfg(test)]
impl Outcome {
    fn consumed(self) -> bool {
        !matches!(self, Outcome::Passed)
    }
}

pub(crate) struct BarState {
    color: BarColor,
    markers: [Marker; 3],
    drag: DragController,
    client_width: f64,
}

impl BarState {
    pub(crate) fn new(color: BarColor, client_width: f64) -> Self {
        let mut state = Self {
            color,
            markers: [Marker::default(); 3],
            drag: DragController::new(),
            client_width,
        };
        state.recompute_markers();
        state
    }

    pub(crate) fn color(&self) -> BarColor {
        self.color
    }

    pub(crate) fn marker(&self, channel: Channel) -> Marker {
        self.markers[channel.index()]
    }

    pub(crate) fn active(&self) -> Channel {
        self.drag.active()
    }

    #[cfg(test)]
    pub(crate) fn is_dragging(&self, channel: Channel) -> bool {
        self.drag.is_dragging(channel)
    }

    fn usable(&self) -> f64 {
        geometry::usable_width(self.client_width)
    }

    /// Replace the color. Returns `false` (and changes nothing) when `color`
    /// is already current.
    pub(crate) fn set_color(&mut self, color: BarColor) -> bool {
        if color == self.color {
            return false;
        }
        self.color = color;
        self.recompute_markers();
        true
    }

    /// Adopt a new client width and reposition every marker for it. Returns
    /// whether the width actually changed.
    pub(crate) fn resize(&mut self, client_width: f64) -> bool {
        if (client_width - self.client_width).abs() < f64::EPSILON {
            return false;
        }
        self.client_width = client_width;
        self.recompute_markers();
        true
    }

    /// Route one pointer event, already in client coordinates.
    pub(crate) fn pointer(&mut self, phase: PointerPhase, pos: Point) -> Outcome {
        match self.drag.route(phase, pos, self.client_width) {
            Routing::Pressed(_) => {
                // The pressed channel's marker drops to the drag offset.
                self.recompute_markers();
                Outcome::Claimed { notify: false }
            }
            Routing::Tracked { channel, marker_x } => {
                self.track(channel, marker_x);
                Outcome::Claimed { notify: true }
            }
            Routing::Swallowed => Outcome::Swallowed,
            Routing::Pass => Outcome::Passed,
        }
    }

    /// Nudge the active channel's marker one pixel left or right.
    pub(crate) fn nudge(&mut self, direction: i32) {
        let channel = self.drag.active();
        let marker_x =
            (self.markers[channel.index()].x + f64::from(direction)).clamp(0.0, self.usable());
        self.track(channel, marker_x);
    }

    /// Apply a tracked marker position: derive the channel value, then
    /// recompute all markers from the resulting color.
    fn track(&mut self, channel: Channel, marker_x: f64) {
        let value = geometry::marker_x_to_value(marker_x, self.usable());
        self.color = self.color.with_channel(channel, value);
        self.recompute_markers();
    }

    fn recompute_markers(&mut self) {
        for channel in Channel::ALL {
            let x = geometry::value_to_marker_x(self.color.channel(channel), self.usable());
            let y = geometry::marker_y(channel, self.drag.is_dragging(channel));
            self.markers[channel.index()] = Marker { x, y };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Default 150-wide widget: client 142, usable 140.
    const CLIENT: f64 = 142.0;

    fn white() -> BarState {
        BarState::new(BarColor::WHITE, CLIENT)
    }

    #[test]
    fn starts_white_with_markers_at_the_right_edge() {
        let state = white();
        for channel in Channel::ALL {
            assert_eq!(state.marker(channel).x, 140.0);
            assert_eq!(state.marker(channel).y, geometry::marker_y(channel, false));
        }
    }

    #[test]
    fn set_color_repositions_all_markers() {
        let mut state = white();
        assert!(state.set_color(BarColor::from_rgb(0, 128, 64)));
        assert_eq!(state.marker(Channel::Red).x, 0.0);
        assert_eq!(state.marker(Channel::Green).x, 70.0);
        assert_eq!(state.marker(Channel::Blue).x, 35.0);
    }

    #[test]
    fn setting_the_same_color_is_a_no_op() {
        let mut state = white();
        assert!(state.set_color(BarColor::from_rgb(0, 128, 64)));
        assert!(!state.set_color(BarColor::from_rgb(0, 128, 64)));
    }

    #[test]
    fn alpha_survives_a_drag() {
        let mut state = BarState::new(BarColor::from_rgba(10, 20, 30, 77), CLIENT);
        state.pointer(PointerPhase::Down, Point::new(5.0, 9.0));
        state.pointer(PointerPhase::Up, Point::new(70.0, 9.0));
        assert_eq!(state.color().a(), 77);
    }

    #[test]
    fn drag_to_pixel_sets_only_that_channel() {
        let mut state = white();
        let down = state.pointer(PointerPhase::Down, Point::new(5.0, 9.0));
        assert_eq!(down, Outcome::Claimed { notify: false });
        assert!(state.is_dragging(Channel::Red));
        assert_eq!(state.marker(Channel::Red).y, 11.0);

        let moved = state.pointer(PointerPhase::Move, Point::new(70.0, 9.0));
        assert_eq!(moved, Outcome::Claimed { notify: true });
        assert_eq!(state.color().r(), geometry::marker_x_to_value(70.0, 140.0));
        assert_eq!(state.color().g(), 255);
        assert_eq!(state.color().b(), 255);
    }

    #[test]
    fn drag_beyond_the_right_edge_clamps_to_full() {
        let mut state = white();
        state.set_color(BarColor::from_rgb(0, 128, 64));
        assert!(state.pointer(PointerPhase::Down, Point::new(5.0, 9.0)).consumed());
        let moved = state.pointer(PointerPhase::Move, Point::new(200.0, 9.0));
        assert!(moved.consumed());
        assert_eq!(state.color().r(), 255);
        assert_eq!(state.marker(Channel::Red).x, 140.0);
        // Other channels untouched.
        assert_eq!(state.color().g(), 128);
        assert_eq!(state.color().b(), 64);
    }

    #[test]
    fn release_ends_the_drag_and_rests_the_marker() {
        let mut state = white();
        state.pointer(PointerPhase::Down, Point::new(5.0, 9.0));
        let up = state.pointer(PointerPhase::Up, Point::new(35.0, 9.0));
        assert_eq!(up, Outcome::Claimed { notify: true });
        assert!(!state.is_dragging(Channel::Red));
        assert_eq!(state.marker(Channel::Red).y, 9.0);
        assert_eq!(state.marker(Channel::Red).x, 35.0);
    }

    #[test]
    fn unclaimed_events_swallow_inside_and_pass_outside() {
        let mut state = white();
        assert_eq!(
            state.pointer(PointerPhase::Move, Point::new(50.0, 44.0)),
            Outcome::Swallowed
        );
        assert_eq!(
            state.pointer(PointerPhase::Move, Point::new(50.0, 50.0)),
            Outcome::Passed
        );
        assert_eq!(
            state.pointer(PointerPhase::Down, Point::new(-10.0, 9.0)),
            Outcome::Passed
        );
    }

    #[test]
    fn resize_repositions_markers_for_the_new_width() {
        let mut state = white();
        assert!(state.resize(100.0));
        for channel in Channel::ALL {
            assert_eq!(state.marker(channel).x, 98.0);
        }
        assert!(!state.resize(100.0));
    }

    #[test]
    fn nudge_moves_the_active_channel_one_pixel() {
        let mut state = white();
        // Press and release in the green band to make it active.
        state.pointer(PointerPhase::Down, Point::new(55.0, 20.0));
        state.pointer(PointerPhase::Up, Point::new(55.0, 20.0));
        assert_eq!(state.active(), Channel::Green);
        state.set_color(state.color().with_channel(Channel::Green, 100));
        assert_eq!(state.marker(Channel::Green).x, 55.0);

        state.nudge(-1);
        assert_eq!(state.marker(Channel::Green).x, 54.0);
        assert_eq!(state.color().g(), 98);
    }

    #[test]
    fn nudge_clamps_at_the_track_ends() {
        let mut state = white();
        state.nudge(1);
        assert_eq!(state.marker(Channel::Red).x, 140.0);
        assert_eq!(state.color().r(), 255);

        state.set_color(state.color().with_channel(Channel::Red, 0));
        state.nudge(-1);
        assert_eq!(state.marker(Channel::Red).x, 0.0);
        assert_eq!(state.color().r(), 0);
    }
}
