//! The welcome screen and its layers.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use lumen_ui::theme::{ThemedRoot, CURRENT_THEME};

use crate::state::WelcomeMotion;
use crate::style::{self, Viewport};

/// Nominal frame interval for the animation driver (about 60fps). Actual
/// elapsed time is measured per frame, so playback speed does not depend
/// on the timer being honored exactly.
const FRAME: Duration = Duration::from_millis(16);

/// Root component: themed shell around the welcome screen.
#[component]
pub fn App() -> Element {
    rsx! {
        ThemedRoot {
            WelcomeScreen {}
        }
    }
}

/// The animated welcome view: hue wash, gradient tint, spinning card.
#[component]
pub fn WelcomeScreen() -> Element {
    let mut motion = use_signal(WelcomeMotion::new);
    let mut viewport = use_signal(Viewport::default);

    // Entrance and loop curves, declared once on mount.
    use_effect(move || {
        motion.write().start();
        tracing::debug!("welcome entrance started");
    });

    // Frame driver. Dropped with the component, which stops all playback.
    use_future(move || async move {
        let mut last = Instant::now();
        loop {
            tokio::time::sleep(FRAME).await;
            let now = Instant::now();
            motion.write().advance(now - last);
            last = now;
        }
    });

    use_drop(|| {
        tracing::debug!("welcome screen unmounted");
    });

    let m = motion.read();
    let palette = CURRENT_THEME.read().palette();
    let side = viewport.read().glyph_box_side();
    let radius = side / 2.0;

    let hue_wash = style::background_style(m.color_progress());
    let tint = style::gradient_overlay_style();
    let card_transform = style::container_style(m.scale(), m.rotation(), m.lift(), m.opacity());
    let pulse = style::text_style(m.color_progress());
    let text_block = style::text_block_style(m.lift(), m.opacity());

    rsx! {
        div {
            class: "welcome-screen",
            onresize: move |event| {
                if let Ok(size) = event.get_border_box_size() {
                    viewport.set(Viewport::new(size.width, size.height));
                }
            },
            div { class: "hue-layer", style: "{hue_wash}" }
            div { class: "gradient-overlay", style: "{tint}" }
            div { class: "content",
                div {
                    class: "glyph-card",
                    style: "width: {side:.2}px; height: {side:.2}px; border-radius: {radius:.2}px; background-color: {palette.card_background}; {card_transform}",
                    span {
                        class: "glyph",
                        style: "color: {palette.primary_text}; {pulse}",
                        "✨"
                    }
                }
                div { class: "welcome-text", style: "{text_block}",
                    h1 { class: "welcome-title", style: "{pulse}", "Welcome" }
                    p { class: "welcome-subtitle", "Beautiful animations\npowered by Lumen Motion" }
                }
            }
        }
    }
}
