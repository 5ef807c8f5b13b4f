//! Standalone demo: opens a window with the bar editor.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_colorbar::{color_bar_editor, BarColor};

fn main() {
    let color = RwSignal::new(BarColor::from_rgb(255, 255, 255));

    floem::Application::new()
        .window(
            move |_| {
                color_bar_editor(color).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((230.0, 170.0))
                    .title("floem-colorbar"),
            ),
        )
        .run();
}
