//=============================================================================
// File: src/screens/portfolio.rs
//=============================================================================
use dioxus::prelude::*;
use dioxus_logger::tracing;
use model::content::INVESTMENT_CRITERIA;
use model::content::PORTFOLIO;
use model::Effect;
use model::View;
use model::ViewSwitch;

use crate::compat;
use crate::components::icons::Icon;
use crate::components::icons::IconKind;
use crate::components::portfolio_card::PortfolioCard;

#[component]
pub fn PortfolioView(on_navigate: EventHandler<View>) -> Element {
    // Entering this page always starts at the top, however it was reached.
    use_hook(|| {
        for effect in ViewSwitch::mount_effects(View::Portfolio) {
            if let Effect::ScrollToTop(reason) = effect {
                tracing::debug!("scroll reset: {reason:?}");
                compat::scroll_to_top();
            }
        }
    });

    rsx! {
        div {
            class: "portfolio-page rise-in",
            div {
                class: "wrap",
                button {
                    class: "back-link",
                    onclick: move |_| on_navigate.call(View::Home),
                    Icon { kind: IconKind::ArrowLeft, size: 20 }
                    " Back to Home"
                }
                div {
                    class: "portfolio-header",
                    h2 {
                        class: "page-title",
                        "Our "
                        span { class: "text-orange", "Portfolio" }
                        "."
                    }
                    p { class: "page-subtitle", "Transforming industries through strategic acquisition and growth." }
                }
                div {
                    class: "portfolio-grid",
                    for holding in PORTFOLIO {
                        PortfolioCard { key: "{holding.company}", holding }
                    }
                }
            }
            InvestmentCriteria {}
        }
    }
}

#[component]
fn InvestmentCriteria() -> Element {
    rsx! {
        section {
            class: "criteria",
            div {
                class: "wrap criteria-inner",
                h3 { class: "criteria-title", "Investment Criteria" }
                div {
                    class: "criteria-grid",
                    for criterion in INVESTMENT_CRITERIA {
                        div {
                            key: "{criterion.title}",
                            class: "criteria-card",
                            h4 { class: "{criterion.tone}", "{criterion.title}" }
                            p { "{criterion.body}" }
                        }
                    }
                }
            }
        }
    }
}
