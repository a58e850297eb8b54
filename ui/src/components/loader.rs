//=============================================================================
// File: src/components/loader.rs
//=============================================================================
use std::time::Duration;

use dioxus::prelude::*;
use model::content::LOADER_BLOCK_DELAYS;
use model::content::LOADER_LABEL_DELAY;

use crate::hooks::use_loading_timer::use_loading_timer;
use crate::page_state::use_app_config;

/// Full-screen splash shown while the loading gate is pending.
///
/// Reports loader time through `on_elapsed` while mounted. While `exiting`
/// is set the overlay fades out on top of the freshly mounted page.
#[component]
pub fn GeometricLoader(exiting: bool, on_elapsed: EventHandler<Duration>) -> Element {
    let config = use_app_config();
    let timing = config.loader;
    use_loading_timer(timing, on_elapsed);

    let class = if exiting { "loader exiting" } else { "loader" };
    let busy = !exiting;
    let [orange, teal, dark] = LOADER_BLOCK_DELAYS;

    rsx! {
        div {
            class: "{class}",
            style: "--fade-ms: {timing.exit_fade_ms}ms;",
            "aria-busy": "{busy}",
            div {
                class: "loader-stage",
                div { class: "loader-block orange drop", style: "animation-delay: {orange}s;" }
                div { class: "loader-block teal slide", style: "animation-delay: {teal}s;" }
                div { class: "loader-block dark rise", style: "animation-delay: {dark}s;" }
                div {
                    class: "loader-label",
                    style: "animation-delay: {LOADER_LABEL_DELAY}s;",
                    "LOADING"
                }
            }
        }
    }
}
