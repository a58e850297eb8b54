//! Defines the page-wide state shared through Dioxus context.

use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use model::site::NavbarPlan;
use model::RenderPlan;
use model::Site;
use model::SiteConfig;
use model::View;

use crate::compat;

/// The immutable site configuration, cheap to clone into every component.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig(Arc<SiteConfig>);

impl Deref for AppConfig {
    type Target = SiteConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppConfig {
    pub fn new(config: SiteConfig) -> Self {
        Self(Arc::new(config.or_default()))
    }
}

/// Reactive page state: one [`Site`] behind a signal. Every change goes
/// through a named method here, and components read it through memos so a
/// scroll event only re-renders what depends on the scroll position.
#[derive(Clone, Copy)]
pub struct PageState {
    pub site: Signal<Site>,
}

impl PageState {
    pub fn render_plan(&self) -> RenderPlan {
        self.site.read().render_plan()
    }

    /// `None` while the loader is up.
    pub fn navbar_plan(&self) -> Option<NavbarPlan> {
        self.render_plan().main.map(|main| main.navbar)
    }

    pub fn hero_opacity(&self) -> f64 {
        let site = self.site.read();
        site.scroll().hero_opacity(&site.config().scroll)
    }

    /// Feeds loader time into the gate.
    pub fn advance_clock(&mut self, dt: Duration) {
        if self.site.write().tick(dt) {
            tracing::info!("loading gate opened");
        }
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.site.write().on_scroll(offset);
    }

    pub fn toggle_menu(&mut self) {
        self.site.write().toggle_menu();
    }

    /// Switches view, closes the mobile menu and, when going home, scrolls
    /// the viewport to the top. The portfolio page resets scroll itself when
    /// it mounts.
    pub fn navigate_to(&mut self, target: View) {
        let effects = self.update(|site| site.navigate_to(target));
        if effects.iter().any(|effect| effect.is_navigation_scroll_reset()) {
            compat::scroll_to_top();
        }
    }

    /// Applies `change` to a copy and only writes the signal if the copy
    /// differs, so a no-op change does not notify any reader.
    fn update<R>(&mut self, change: impl FnOnce(&mut Site) -> R) -> R {
        let mut next = self.site.peek().clone();
        let out = change(&mut next);
        if next != *self.site.peek() {
            self.site.set(next);
        }
        out
    }
}

pub fn use_page_state() -> PageState {
    use_context::<PageState>()
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}
