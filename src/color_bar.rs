//! The three-bar RGB widget.
//!
//! Three horizontal gradient strips — red, green, blue — each with a small
//! triangular marker. A strip sweeps its own channel 0→255 while the other
//! two channels are held at the current color, so moving one marker re-tints
//! the other two strips.

use floem::kurbo::{Point, Rect};
use floem::peniko::Color;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    keyboard::{Key, KeyEvent, NamedKey},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::{BarColor, Channel};
use crate::constants;
use crate::drag::PointerPhase;
use crate::geometry;
use crate::gradient::BarImage;
use crate::state::{BarState, Outcome};

enum ColorBarUpdate {
    Color(BarColor),
}

pub struct ColorBar {
    id: ViewId,
    state: BarState,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(BarColor)>>,
    on_key_down: Option<Box<dyn Fn(&KeyEvent) -> bool>>,
    on_key_up: Option<Box<dyn Fn(&KeyEvent)>>,
    bars: [BarImage; 3],
}

/// Creates the RGB bar widget.
///
/// The widget reads from and writes to `color`. External changes to the
/// signal move the markers and re-tint the bars; dragging a marker or nudging
/// it with the arrow keys writes the signal.
pub fn color_bar(color: RwSignal<BarColor>) -> ColorBar {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = color.get();
        id.update_state(ColorBarUpdate::Color(c));
    });

    let client_width = f64::from(constants::DEFAULT_WIDTH) - 2.0 * constants::CLIENT_INSET;

    ColorBar {
        id,
        state: BarState::new(color.get_untracked(), client_width),
        size: Default::default(),
        on_change: Some(Box::new(move |c| {
            color.set(c);
        })),
        on_key_down: None,
        on_key_up: None,
        bars: [
            BarImage::new(Channel::Red),
            BarImage::new(Channel::Green),
            BarImage::new(Channel::Blue),
        ],
    }
    .keyboard_navigable()
    .style(|s| {
        s.width(constants::DEFAULT_WIDTH)
            .height(constants::CLIENT_HEIGHT)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ColorBar {
    /// Sets a key-down callback. Returning `true` marks the key handled and
    /// suppresses the built-in arrow-key nudge.
    pub fn on_key_down(mut self, cb: impl Fn(&KeyEvent) -> bool + 'static) -> Self {
        self.on_key_down = Some(Box::new(cb));
        self
    }

    /// Sets a key-up callback.
    pub fn on_key_up(mut self, cb: impl Fn(&KeyEvent) + 'static) -> Self {
        self.on_key_up = Some(Box::new(cb));
        self
    }

    fn client_width(&self) -> f64 {
        (f64::from(self.size.width) - 2.0 * constants::CLIENT_INSET).max(0.0)
    }

    fn to_client(&self, pos: Point) -> Point {
        Point::new(pos.x - constants::CLIENT_INSET, pos.y)
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_change {
            cb(self.state.color());
        }
    }

    fn apply(&mut self, outcome: Outcome) -> EventPropagation {
        match outcome {
            Outcome::Claimed { notify } => {
                if notify {
                    self.notify();
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Outcome::Swallowed => EventPropagation::Stop,
            Outcome::Passed => EventPropagation::Continue,
        }
    }
}

impl View for ColorBar {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<ColorBarUpdate>() {
            match *update {
                ColorBarUpdate::Color(c) => {
                    // No-op when the color is already current; this also
                    // breaks the echo when a drag writes the signal.
                    if self.state.set_color(c) {
                        self.id.request_layout();
                    }
                }
            }
        }
    }

    // Children get first refusal: floem dispatches to them before calling
    // this, and a child that stops the event ends propagation there.
    fn event_after_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                let outcome = self.state.pointer(PointerPhase::Down, self.to_client(e.pos));
                if matches!(outcome, Outcome::Claimed { .. }) {
                    cx.update_active(self.id());
                    self.id.request_focus();
                }
                self.apply(outcome)
            }
            Event::PointerMove(e) => {
                let outcome = self.state.pointer(PointerPhase::Move, self.to_client(e.pos));
                self.apply(outcome)
            }
            Event::PointerUp(e) => {
                let outcome = self.state.pointer(PointerPhase::Up, self.to_client(e.pos));
                self.apply(outcome)
            }
            Event::KeyDown(ke) => {
                let handled = self
                    .on_key_down
                    .as_ref()
                    .is_some_and(|cb| cb(ke));
                if !handled {
                    let step = if ke.key.logical_key == Key::Named(NamedKey::ArrowLeft) {
                        -1
                    } else if ke.key.logical_key == Key::Named(NamedKey::ArrowRight) {
                        1
                    } else {
                        0
                    };
                    if step != 0 {
                        self.state.nudge(step);
                        self.notify();
                        self.id.request_layout();
                    }
                }
                // Keyboard events never propagate past the widget.
                EventPropagation::Stop
            }
            Event::KeyUp(ke) => {
                if let Some(cb) = &self.on_key_up {
                    cb(ke);
                }
                EventPropagation::Stop
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        self.state.resize(self.client_width());
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let client_width = self.client_width();
        if client_width <= 0.0 {
            return;
        }
        let left = constants::CLIENT_INSET;

        let scale = cx.scale().max(1.0);
        let width_px = (client_width * scale).round() as u32;
        let color = self.state.color();
        let (fr, fg, fb) = constants::TRACK_FORE;
        let fore = Color::rgb8(fr, fg, fb);

        for channel in Channel::ALL {
            let top = geometry::band_top(channel);
            let bar = &mut self.bars[channel.index()];
            bar.ensure(color, width_px);
            if let Some((img, hash)) = bar.image() {
                cx.draw_img(
                    floem_renderer::Img {
                        img: img.clone(),
                        hash,
                    },
                    Rect::new(
                        left,
                        top,
                        left + client_width,
                        top + constants::BAR_STRIP_HEIGHT,
                    ),
                );
            }

            // Marker: three stacked strips of widths 1, 3, 5 forming a small
            // downward-widening arrow at the marker position.
            let marker = self.state.marker(channel);
            let mx = left + 1.0 + marker.x;
            let my = marker.y;
            for j in 0..3 {
                let jf = f64::from(j);
                let strip = Rect::new(mx - jf, my + jf, mx + 1.0 + jf, my + jf + 1.0);
                cx.fill(&strip, fore, 0.0);
            }
        }
    }
}
