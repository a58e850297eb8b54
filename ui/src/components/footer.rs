use dioxus::prelude::*;
use model::content::COPYRIGHT;
use model::content::FOOTER_EXPLORE;
use model::content::FOOTER_LEGAL;
use model::content::FOOTER_SOCIAL;
use model::View;

use crate::components::logo::LogoMark;
use crate::page_state::use_app_config;

#[component]
pub fn Footer(on_navigate: EventHandler<View>) -> Element {
    let config = use_app_config();
    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "wrap",
                div {
                    class: "footer-grid",
                    div {
                        class: "footer-about",
                        a {
                            class: "footer-brand",
                            href: "{config.base_path}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_navigate.call(View::Home);
                            },
                            LogoMark { inverted: true }
                            span { "TCapital" }
                        }
                        p {
                            "Domain expertise in "
                            strong { "Healthcare" }
                            " and "
                            strong { "Real Estate" }
                            ". "
                            br {}
                            "Building the future, one partnership at a time."
                        }
                    }
                    div {
                        h4 { class: "footer-heading text-teal-light", "Explore" }
                        ul {
                            li {
                                button {
                                    class: "footer-link",
                                    onclick: move |_| on_navigate.call(View::Portfolio),
                                    "Portfolio"
                                }
                            }
                            for link in FOOTER_EXPLORE {
                                li { key: "{link}", a { class: "footer-link", href: "#", "{link}" } }
                            }
                        }
                    }
                    div {
                        h4 { class: "footer-heading text-orange", "Social" }
                        ul {
                            for link in FOOTER_SOCIAL {
                                li { key: "{link}", a { class: "footer-link", href: "#", "{link}" } }
                            }
                        }
                    }
                }
                div {
                    class: "footer-bottom",
                    p { "{COPYRIGHT}" }
                    div {
                        class: "footer-legal",
                        for link in FOOTER_LEGAL {
                            a { key: "{link}", class: "footer-link", href: "#", "{link}" }
                        }
                    }
                }
            }
        }
    }
}
