use dioxus::prelude::*;
use model::SiteConfig;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // native builds may tune timings through TCAPITAL_* env vars
    let config = use_hook(|| ui::AppConfig::new(SiteConfig::from_env()));
    rsx! {
        ui::Website { config }
    }
}
