// The client-side Dioxus application logic.

use std::time::Duration;

use dioxus::prelude::*;
use model::Site;
use model::SiteConfig;
use model::View;

pub mod compat;
mod components;
pub mod hooks;
mod page_state;
mod screens;

use components::footer::Footer;
use components::loader::GeometricLoader;
use components::navbar::Navbar;
use hooks::use_scroll_tracker::use_scroll_tracker;
pub use page_state::AppConfig;
use page_state::use_app_config;
use page_state::use_page_state;
use page_state::PageState;
use screens::home::HomeView;
use screens::portfolio::PortfolioView;

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

/// The page shell: document head, stylesheet and the composed page.
#[component]
pub fn Website(config: AppConfig) -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "TCapital" }
        document::Stylesheet {
            href: asset!("/assets/css/tcapital.css"),
        }
        ComposedPage { config }
    }
}

/// Owns the page state and provides it, with the config, to everything
/// below.
#[component]
fn ComposedPage(config: AppConfig) -> Element {
    // Provide the stable, non-reactive config.
    use_context_provider(|| config.clone());

    let site = use_signal(|| Site::new(SiteConfig::clone(&config)));
    let page = use_context_provider(|| PageState { site });
    use_scroll_tracker(page);

    rsx! {
        PageFrame {}
    }
}

/// Decides what is mounted: the splash alone while loading, then navbar,
/// the current view and the footer, with the splash fading out on top.
#[component]
fn PageFrame() -> Element {
    let mut page = use_page_state();
    let config = use_app_config();
    // which pieces are mounted; scrolling alone never changes it
    let layout = use_memo(move || page.render_plan().layout());
    let (loader, content) = layout();

    // menu closing and scroll resets happen inside `navigate_to`
    let navigate = move |target: View| page.navigate_to(target);
    let content_fade_ms = config.loader.content_fade_ms;

    rsx! {
        div {
            class: "site",
            if !loader.is_gone() {
                GeometricLoader {
                    exiting: loader.is_exiting(),
                    on_elapsed: move |dt: Duration| page.advance_clock(dt),
                }
            }

            if let Some(view) = content {
                div {
                    class: "fade-in",
                    style: "animation-duration: {content_fade_ms}ms;",
                    Navbar {}
                    main {
                        match view {
                            View::Home => rsx! {
                                HomeView { on_navigate: navigate }
                            },
                            View::Portfolio => rsx! {
                                PortfolioView { on_navigate: navigate }
                            },
                        }
                    }
                    Footer { on_navigate: navigate }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mounts the real page frame over a site that has already seen
    /// `elapsed_ms` of loader time, a navigation to `view`, and so on.
    #[component]
    fn Harness(elapsed_ms: u64, view: View, menu_open: bool, offset: f64) -> Element {
        use_context_provider(|| AppConfig::new(SiteConfig::default()));
        let site = use_signal(|| {
            let mut site = Site::default();
            site.tick(Duration::from_millis(elapsed_ms));
            site.navigate_to(view);
            if menu_open {
                site.toggle_menu();
            }
            site.on_scroll(offset);
            site
        });
        use_context_provider(|| PageState { site });
        rsx! {
            PageFrame {}
        }
    }

    fn render(elapsed_ms: u64, view: View, menu_open: bool, offset: f64) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                elapsed_ms,
                view,
                menu_open,
                offset,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[tokio::test]
    async fn only_the_loader_while_pending() {
        let html = render(1999, View::Home, false, 0.0);
        assert!(html.contains("class=\"loader\""));
        assert!(html.contains("LOADING"));
        assert!(!html.contains("navbar"));
        assert!(!html.contains("site-footer"));
    }

    #[tokio::test]
    async fn loader_fades_over_the_mounted_page() {
        let html = render(2000, View::Home, false, 0.0);
        assert!(html.contains("class=\"loader exiting\""));
        assert!(html.contains("class=\"navbar\""));
        assert!(html.contains("class=\"hero\""));
        assert!(html.contains("site-footer"));
    }

    #[tokio::test]
    async fn loader_unmounts_after_its_fade() {
        let html = render(2800, View::Home, false, 0.0);
        assert!(!html.contains("LOADING"));
        assert!(html.contains("class=\"navbar\""));
        assert!(html.contains("site-footer"));
    }

    #[tokio::test]
    async fn scroll_drives_navbar_and_hero() {
        let html = render(3000, View::Home, false, 60.0);
        assert!(html.contains("class=\"navbar scrolled\""));
        assert!(html.contains("opacity: 0.8;"));

        let html = render(3000, View::Home, false, 50.0);
        assert!(html.contains("class=\"navbar\""));

        let html = render(3000, View::Home, false, 450.0);
        assert!(html.contains("opacity: 0;"));
    }

    #[tokio::test]
    async fn portfolio_replaces_home() {
        let html = render(3000, View::Portfolio, false, 0.0);
        assert!(html.contains("portfolio-page"));
        assert!(!html.contains("class=\"hero\""));
        assert!(html.contains("nav-link active"));
        assert!(html.contains("site-footer"));
    }

    #[tokio::test]
    async fn cards_wait_to_be_seen() {
        let html = render(3000, View::Portfolio, false, 0.0);
        assert!(html.contains("class=\"reveal\""));
        assert!(!html.contains("reveal seen"));
    }

    #[tokio::test]
    async fn menu_overlay_follows_menu_state() {
        let open = render(3000, View::Home, true, 0.0);
        assert!(open.contains("class=\"mobile-menu\""));
        assert!(open.contains("Close menu"));

        let closed = render(3000, View::Home, false, 0.0);
        assert!(!closed.contains("class=\"mobile-menu\""));
        assert!(closed.contains("Open menu"));
    }
}
