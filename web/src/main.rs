use dioxus::prelude::*;
use dioxus_logger::tracing;
use model::SiteConfig;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// The static bundle has no environment to read, so it always runs with the
/// built-in config.
fn bundle_config() -> ui::AppConfig {
    ui::AppConfig::new(SiteConfig::default())
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = bundle_config();
        tracing::info!("serving TCapital from {}", config.base_path);
        config
    });
    rsx! {
        ui::Website { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_point_where_the_bundle_is_served() {
        let manifest = include_str!("../Dioxus.toml");
        let served_from = manifest
            .lines()
            .find_map(|line| line.trim().strip_prefix("base_path = "))
            .map(|value| value.trim_matches('"'))
            .unwrap();
        assert_eq!(bundle_config().base_path, format!("/{served_from}/"));
    }
}
