use dioxus::prelude::*;

/// The three-block TCapital mark. `inverted` swaps the dark block for a
/// white one, for use on the black footer.
#[component]
pub fn LogoMark(#[props(default = false)] inverted: bool) -> Element {
    let size_class = if inverted { "logo-mark small" } else { "logo-mark" };
    let tall_class = if inverted { "block tall white" } else { "block tall dark" };
    rsx! {
        div {
            class: "{size_class}",
            div { class: "block top-right orange" }
            div { class: "block bottom-left teal" }
            div { class: "{tall_class}" }
        }
    }
}
