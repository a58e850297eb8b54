use dioxus::prelude::*;
use model::SiteConfig;

fn main() {
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ui::AppConfig::new(SiteConfig::from_env()));
    rsx! {
        ui::Website { config }
    }
}
