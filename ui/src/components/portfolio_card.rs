use dioxus::prelude::*;
use model::content::Holding;
use model::content::CARD_REVEAL;

use crate::components::icons::Icon;
use crate::components::icons::IconKind;
use crate::components::reveal::Reveal;

/// Image card for one holding. Rises in the first time it scrolls into
/// view. Greyscale until hovered, then the caption and the arrow slide in.
#[component]
pub fn PortfolioCard(holding: Holding) -> Element {
    let caption = holding.caption();
    let accent = holding.accent.as_ref();
    rsx! {
        Reveal {
            motion: CARD_REVEAL,
            article {
                class: "portfolio-card",
                div { class: "portfolio-card-shade" }
                img {
                    class: "portfolio-card-image",
                    src: "{holding.image}",
                    alt: "{holding.company}",
                    loading: "lazy",
                }
                div {
                    class: "portfolio-card-body",
                    div {
                        class: "portfolio-card-top",
                        div {
                            class: "portfolio-card-tags",
                            span { class: "pill bg-{accent}", "{holding.category}" }
                            if let Some(acquirer) = holding.acquired_by() {
                                span { class: "acquired-tag", "Acquired by {acquirer}" }
                            }
                        }
                        div {
                            class: "portfolio-card-arrow",
                            Icon { kind: IconKind::ArrowUpRight, size: 20 }
                        }
                    }
                    div {
                        h3 { class: "portfolio-card-title", "{holding.company}" }
                        p { class: "portfolio-card-caption", "{caption}" }
                    }
                }
            }
        }
    }
}
