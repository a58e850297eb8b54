use dioxus::prelude::*;
use model::content::floating_card_delay;
use model::content::floating_card_keyframes;
use model::content::Company;
use model::content::COMPANIES;
use model::content::FLOATING_CARD_CYCLE;

/// Company chips drifting up and out of the hero, one after another.
#[component]
pub fn FloatingExitCards() -> Element {
    let keyframes = use_hook(|| floating_card_keyframes("float-card"));
    rsx! {
        style { "{keyframes}" }
        div {
            class: "floating-cards",
            for (index, company) in COMPANIES.iter().enumerate() {
                FloatingCard { key: "{company.name}", company: *company, index }
            }
        }
    }
}

#[component]
fn FloatingCard(company: Company, index: usize) -> Element {
    let delay = floating_card_delay(index);
    let accent = company.accent.as_ref();
    rsx! {
        div {
            class: "floating-card",
            style: "animation-delay: {delay}s; animation-duration: {FLOATING_CARD_CYCLE}s;",
            div { class: "chip bg-{accent}", "{company.initials}" }
            p { class: "floating-card-name", "{company.name}" }
        }
    }
}
