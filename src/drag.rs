//! Per-channel drag state machine and pointer routing.
//!
//! Each channel carries its own two-state machine. Normal single-pointer
//! input never has two channels dragging at once, but nothing here assumes
//! exclusivity: the slots are independent and a stray second Dragging flag
//! cannot corrupt the first.

use floem::kurbo::{Point, Rect};

use crate::color::Channel;
use crate::constants;
use crate::geometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Which part of a pointer event's lifecycle is being routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Routing decision for one pointer event, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Routing {
    /// A press started a drag on this channel.
    Pressed(Channel),
    /// A dragging channel tracked the pointer to `marker_x` (clamped into the
    /// track).
    Tracked { channel: Channel, marker_x: f64 },
    /// Nobody claimed the event but it landed inside the client area; consume
    /// it so it cannot fall through to whatever is behind the widget.
    Swallowed,
    /// Outside the client area; ancestors may still process it.
    Pass,
}

pub(crate) struct DragController {
    states: [DragState; 3],
    active: Channel,
}

impl DragController {
    pub(crate) fn new() -> Self {
        Self {
            states: [DragState::Idle; 3],
            active: Channel::Red,
        }
    }

    /// The last channel that received a press; keyboard nudges go here.
    pub(crate) fn active(&self) -> Channel {
        self.active
    }

    pub(crate) fn is_dragging(&self, channel: Channel) -> bool {
        self.states[channel.index()] == DragState::Dragging
    }

    /// Route one pointer event. Channels are tested in index order; the first
    /// one that is dragging (for moves and releases) or whose band contains
    /// the press wins and short-circuits the rest.
    pub(crate) fn route(&mut self, phase: PointerPhase, pos: Point, client_width: f64) -> Routing {
        let usable = geometry::usable_width(client_width);

        for channel in Channel::ALL {
            let slot = channel.index();
            if self.states[slot] == DragState::Dragging {
                match phase {
                    PointerPhase::Move => {
                        return Routing::Tracked {
                            channel,
                            marker_x: pos.x.clamp(0.0, usable),
                        };
                    }
                    PointerPhase::Up => {
                        self.states[slot] = DragState::Idle;
                        return Routing::Tracked {
                            channel,
                            marker_x: pos.x.clamp(0.0, usable),
                        };
                    }
                    // A dragging channel ignores further presses.
                    PointerPhase::Down => {}
                }
            } else if phase == PointerPhase::Down
                && geometry::band_hit_rect(channel, client_width).contains(pos)
            {
                self.states[slot] = DragState::Dragging;
                self.active = channel;
                return Routing::Pressed(channel);
            }
        }

        let client = Rect::new(0.0, 0.0, client_width, f64::from(constants::CLIENT_HEIGHT));
        if client.contains(pos) {
            Routing::Swallowed
        } else {
            Routing::Pass
        }
    }
}
