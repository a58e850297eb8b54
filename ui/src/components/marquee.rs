use dioxus::prelude::*;
use model::content::marquee_names;
use model::content::MARQUEE_DURATION;
use model::content::MARQUEE_TRAVEL;

#[component]
pub fn Marquee() -> Element {
    rsx! {
        div {
            class: "marquee",
            div {
                class: "marquee-track",
                style: "--travel: -{MARQUEE_TRAVEL}px; animation-duration: {MARQUEE_DURATION}s;",
                for (round, name) in marquee_names() {
                    span { key: "{round}-{name}", class: "marquee-name", "{name}" }
                }
            }
        }
    }
}
