use dioxus::prelude::*;
use model::content::RevealMotion;

/// Wrapper that stays hidden until it first scrolls into view, then plays
/// its entrance once. Scrolling away again does not hide it.
#[component]
pub fn Reveal(motion: RevealMotion, #[props(default)] delay: f64, children: Element) -> Element {
    let mut seen = use_signal(|| false);
    let class = if seen() { "reveal seen" } else { "reveal" };
    let RevealMotion { rise, duration } = motion;

    rsx! {
        div {
            class: "{class}",
            style: "--rise: {rise}px; --reveal-duration: {duration}s; --reveal-delay: {delay}s;",
            onvisible: move |evt| {
                if !*seen.peek() && evt.data().is_intersecting().unwrap_or(false) {
                    seen.set(true);
                }
            },
            {children}
        }
    }
}
