//! The whole page as one owned state container.
//!
//! [`Site`] ties the loading gate, scroll tracker, view switch and mobile
//! menu together and decides what gets mounted. The `ui` crate keeps one
//! `Signal<Site>` and renders from [`Site::render_plan`]; tests drive the
//! same type with a simulated clock.

use std::time::Duration;

use crate::config::SiteConfig;
use crate::loading::LoaderPresence;
use crate::loading::LoadingGate;
use crate::scroll::ScrollState;
use crate::view::Effect;
use crate::view::MobileMenu;
use crate::view::View;
use crate::view::ViewSwitch;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarPlan {
    pub scrolled: bool,
    pub current: View,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MainPlan {
    pub navbar: NavbarPlan,
    pub content: View,
    pub hero_opacity: f64,
}

/// What is on screen right now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPlan {
    pub loader: LoaderPresence,
    /// `None` while the gate is pending. Navbar, content and footer are
    /// mounted together.
    pub main: Option<MainPlan>,
}

impl RenderPlan {
    /// The coarse part of the plan: which pieces are mounted. Scroll-driven
    /// values are left out so that scrolling does not re-render the frame.
    pub fn layout(&self) -> (LoaderPresence, Option<View>) {
        (self.loader, self.main.map(|main| main.content))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    config: SiteConfig,
    gate: LoadingGate,
    scroll: ScrollState,
    view: ViewSwitch,
    menu: MobileMenu,
}

impl Site {
    pub fn new(config: SiteConfig) -> Self {
        let gate = LoadingGate::new(config.loader);
        Self {
            config,
            gate,
            scroll: ScrollState::default(),
            view: ViewSwitch::default(),
            menu: MobileMenu::default(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn current_view(&self) -> View {
        self.view.current()
    }

    pub fn is_loading(&self) -> bool {
        self.gate.is_loading()
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    /// Advances the loader clock. Returns `true` on the one tick that
    /// opened the gate.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.gate.advance(dt)
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scroll.update(offset);
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
    }

    /// Switches view and applies the resulting effects. Returns them too, so
    /// callers can mirror them onto a real viewport.
    pub fn navigate_to(&mut self, target: View) -> Vec<Effect> {
        let effects = self.view.navigate_to(target);
        for effect in &effects {
            match effect {
                Effect::CloseMenu => self.menu.close(),
                Effect::ScrollToTop(_) => self.on_scroll(0.0),
            }
        }
        effects
    }

    pub fn render_plan(&self) -> RenderPlan {
        let main = (!self.gate.is_loading()).then(|| MainPlan {
            navbar: NavbarPlan {
                scrolled: self.scroll.scrolled_past_threshold(),
                current: self.view.current(),
                menu_open: self.menu.is_open(),
            },
            content: self.view.current(),
            hero_opacity: self.scroll.hero_opacity(&self.config.scroll),
        });
        RenderPlan {
            loader: self.gate.presence(),
            main,
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ScrollReset;

    fn loaded_site() -> Site {
        let mut site = Site::default();
        site.tick(Duration::from_millis(2000));
        site
    }

    #[test]
    fn only_loader_while_pending() {
        let site = Site::default();
        let plan = site.render_plan();
        assert_eq!(plan.loader, LoaderPresence::Visible);
        assert_eq!(plan.main, None);
    }

    #[test]
    fn loader_and_main_overlap_during_exit() {
        let site = loaded_site();
        assert_eq!(
            site.render_plan().layout(),
            (LoaderPresence::Exiting, Some(View::Home))
        );
    }

    #[test]
    fn end_to_end_browse() {
        let mut site = Site::default();
        assert!(!site.tick(Duration::from_millis(1000)));
        assert!(site.render_plan().main.is_none());

        assert!(site.tick(Duration::from_millis(1000)));
        let plan = site.render_plan();
        let main = plan.main.expect("main content mounted");
        assert_eq!(main.content, View::Home);
        assert_eq!(main.navbar.current, View::Home);
        assert!(!main.navbar.scrolled);

        assert!(!site.tick(Duration::from_millis(800)));
        assert_eq!(site.render_plan().loader, LoaderPresence::Gone);

        site.on_scroll(420.0);
        let main = site.render_plan().main.unwrap();
        assert!(main.navbar.scrolled);
        assert_eq!(main.hero_opacity, 0.0);

        let effects = site.navigate_to(View::Portfolio);
        assert!(effects.contains(&Effect::ScrollToTop(ScrollReset::PortfolioMounted)));
        assert_eq!(site.current_view(), View::Portfolio);
        assert_eq!(site.scroll().raw_offset(), 0.0);
        assert_eq!(site.render_plan().main.unwrap().content, View::Portfolio);

        site.on_scroll(900.0);
        site.navigate_to(View::Home);
        assert_eq!(site.current_view(), View::Home);
        assert_eq!(site.scroll().raw_offset(), 0.0);
    }

    #[test]
    fn navigation_closes_menu_whatever_the_target() {
        for target in [View::Home, View::Portfolio] {
            let mut site = loaded_site();
            site.toggle_menu();
            assert!(site.render_plan().main.unwrap().navbar.menu_open);
            site.navigate_to(target);
            assert!(!site.menu().is_open());
        }
    }

    #[test]
    fn reselecting_home_at_the_top_changes_nothing() {
        let site = loaded_site();
        let mut next = site.clone();
        let effects = next.navigate_to(View::Home);
        assert!(effects.contains(&Effect::CloseMenu));
        assert_eq!(next, site);
    }

    #[test]
    fn scrolling_keeps_the_layout() {
        let mut site = loaded_site();
        let before = site.render_plan().layout();
        site.on_scroll(120.0);
        assert_eq!(site.render_plan().layout(), before);
        assert_ne!(site.render_plan().main, loaded_site().render_plan().main);
    }

    #[test]
    fn gate_never_reopens() {
        let mut site = loaded_site();
        assert!(!site.tick(Duration::from_secs(10)));
        assert!(!site.is_loading());
        assert!(site.render_plan().main.is_some());
    }
}
