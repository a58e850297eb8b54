//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use dioxus::prelude::*;
use model::content::hero_delay;
use model::content::stat_delay;
use model::content::SECTORS;
use model::content::STATS;
use model::content::STAT_REVEAL;
use model::View;

use crate::components::floating_cards::FloatingExitCards;
use crate::components::icons::Icon;
use crate::components::icons::IconKind;
use crate::components::marquee::Marquee;
use crate::components::reveal::Reveal;
use crate::page_state::use_page_state;

#[component]
pub fn HomeView(on_navigate: EventHandler<View>) -> Element {
    rsx! {
        div {
            class: "fade-in",
            Hero { on_navigate }
            Marquee {}
            StatsSection {}
            ExpertiseSection {}
            CallToAction {}
        }
    }
}

/// Landing section. The floating cards fade out as the page scrolls.
#[component]
fn Hero(on_navigate: EventHandler<View>) -> Element {
    let page = use_page_state();
    // only the opacity is read here, so other scroll changes skip the hero
    let hero_opacity = use_memo(move || page.hero_opacity());
    let opacity = hero_opacity();
    let (badges, headline, tagline, cta) = (
        hero_delay::BADGES,
        hero_delay::HEADLINE,
        hero_delay::TAGLINE,
        hero_delay::CTA,
    );

    rsx! {
        section {
            class: "hero",
            div { class: "hero-glow-top" }
            div { class: "hero-glow-bottom" }
            div {
                class: "wrap hero-inner",
                div {
                    class: "hero-copy",
                    div {
                        class: "hero-badges slide-in",
                        style: "animation-delay: {badges}s;",
                        span {
                            class: "badge badge-teal",
                            Icon { kind: IconKind::Activity, size: 12 }
                            " Healthcare"
                        }
                        span {
                            class: "badge badge-orange",
                            Icon { kind: IconKind::Building, size: 12 }
                            " Real Estate"
                        }
                    }
                    h1 {
                        class: "hero-title rise-in",
                        style: "animation-delay: {headline}s;",
                        "Investing in "
                        br {}
                        span { class: "gradient-text", "Transformational" }
                        " "
                        br {}
                        "Outcomes."
                    }
                    p {
                        class: "hero-tagline rise-in",
                        style: "animation-delay: {tagline}s;",
                        "We partner with visionary founders redefining "
                        strong { "Healthcare" }
                        " and "
                        strong { "Real Estate" }
                        " infrastructure."
                    }
                    div {
                        class: "hero-actions fade-in",
                        style: "animation-delay: {cta}s;",
                        button {
                            class: "cta-dark",
                            onclick: move |_| on_navigate.call(View::Portfolio),
                            "Explore Portfolio"
                            Icon { kind: IconKind::ArrowRight, size: 16, class: "nudge" }
                        }
                    }
                }
                div {
                    class: "hero-art",
                    style: "opacity: {opacity};",
                    div { class: "hero-art-glow" }
                    FloatingExitCards {}
                }
            }
        }
    }
}

#[component]
fn StatsSection() -> Element {
    rsx! {
        section {
            class: "stats",
            div {
                class: "wrap stats-grid",
                for (index, stat) in STATS.iter().enumerate() {
                    Reveal {
                        key: "{index}",
                        motion: STAT_REVEAL,
                        delay: stat_delay(index),
                        div {
                            class: "stat",
                            h4 { class: "stat-value", "{stat.value}" }
                            p { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ExpertiseSection() -> Element {
    rsx! {
        section {
            id: "expertise",
            class: "expertise",
            div {
                class: "wrap two-col",
                div {
                    h2 {
                        class: "section-title",
                        "Deep expertise in "
                        br {}
                        span { class: "text-orange", "Critical Sectors." }
                    }
                }
                div {
                    class: "expertise-copy",
                    for sector in SECTORS {
                        p {
                            key: "{sector.name}",
                            strong { "{sector.name}:" }
                            " {sector.blurb}"
                        }
                    }
                    button { class: "text-link", "View Investment Criteria" }
                }
            }
        }
    }
}

#[component]
fn CallToAction() -> Element {
    rsx! {
        section {
            class: "call-to-action",
            h2 {
                class: "cta-title",
                "Ready to "
                span { class: "text-teal", "scale" }
                "?"
            }
            button { class: "cta-orange", "Get in Touch" }
        }
    }
}
