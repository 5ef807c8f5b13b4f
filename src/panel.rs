//! Composed editor: the RGB bars plus numeric channel inputs, hex entry,
//! clipboard copy, and a live swatch.

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::text::FONT_SYSTEM;

use crate::color::BarColor;
use crate::color_bar::color_bar;
use crate::constants;
use crate::inputs::{channel_input, copy_button, hex_input};

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the bar widget with numeric R/G/B inputs, a hex field, a copy
/// button, and a color swatch below it.
pub fn color_bar_editor(color: RwSignal<BarColor>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });

    let initial = color.get_untracked();
    let r = RwSignal::new(initial.r());
    let g = RwSignal::new(initial.g());
    let b = RwSignal::new(initial.b());
    let hex = RwSignal::new(initial.to_hex());

    // Color → channel/hex display sync
    create_effect(move |_| {
        let c = color.get();
        if r.get_untracked() != c.r() {
            r.set(c.r());
        }
        if g.get_untracked() != c.g() {
            g.set(c.g());
        }
        if b.get_untracked() != c.b() {
            b.set(c.b());
        }
        let new_hex = c.to_hex();
        if hex.get_untracked() != new_hex {
            hex.set(new_hex);
        }
    });

    // Channel inputs → color
    create_effect(move |_| {
        let (rv, gv, bv) = (r.get(), g.get(), b.get());
        let current = color.get_untracked();
        if (rv, gv, bv) != (current.r(), current.g(), current.b()) {
            color.set(BarColor::from_rgba(rv, gv, bv, current.a()));
        }
    });

    // Hex → color; a 6-char hex keeps the current alpha
    create_effect(move |_| {
        let hx = hex.get();
        if let Some(c) = BarColor::from_hex(&hx) {
            let current = color.get_untracked();
            if (c.r(), c.g(), c.b()) != (current.r(), current.g(), current.b()) {
                let a = if hx.trim_start_matches('#').len() == 8 {
                    c.a()
                } else {
                    current.a()
                };
                color.set(BarColor::from_rgba(c.r(), c.g(), c.b(), a));
            }
        }
    });

    v_stack((
        color_bar(color).style(|s| s.margin_top(4.0).align_self(Some(floem::taffy::AlignItems::Center))),
        // R/G/B inputs row
        h_stack((
            channel_input("R", r),
            channel_input("G", g),
            channel_input("B", b),
            copy_button(move || {
                let c = color.get();
                format!("{}, {}, {}", c.r(), c.g(), c.b())
            }),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center()),
        // Hex + copy + swatch row
        h_stack((
            hex_input(hex),
            copy_button(move || hex.get()),
            empty().style(move |st| {
                let c = color.get();
                st.width(20.0)
                    .height(20.0)
                    .border_radius(constants::RADIUS)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(Color::rgba8(c.r(), c.g(), c.b(), c.a()))
            }),
        ))
        .style(|st| st.gap(constants::GAP).items_center().justify_center()),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .padding_top(2.0)
            .size_full()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}
