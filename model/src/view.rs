//! Which top-level page is showing, and what switching pages does.

use dioxus_logger::tracing;
use serde::Deserialize;
use serde::Serialize;

/// The two top-level page modes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIs,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Portfolio,
}

pub type ParseViewError = strum::ParseError;

/// Why the viewport is being sent back to the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollReset {
    /// `navigate_to(Home)` was called.
    Navigation,
    /// The portfolio page was mounted.
    PortfolioMounted,
}

/// Side effects a caller must carry out after a view change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    CloseMenu,
    ScrollToTop(ScrollReset),
}

impl Effect {
    /// True for the reset the navigation handler performs itself. The
    /// portfolio reset is left to the portfolio page, which runs it on mount.
    pub fn is_navigation_scroll_reset(&self) -> bool {
        matches!(self, Effect::ScrollToTop(ScrollReset::Navigation))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MobileMenu {
    is_open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ViewSwitch {
    current: View,
}

impl ViewSwitch {
    pub fn current(&self) -> View {
        self.current
    }

    /// Switches to `target` and returns the effects the caller must apply.
    ///
    /// Re-selecting the current view leaves the state alone but still yields
    /// the same effects.
    pub fn navigate_to(&mut self, target: View) -> Vec<Effect> {
        if self.current != target {
            tracing::info!("view {} -> {}", self.current, target);
        }
        let entered = self.current != target;
        self.current = target;

        let mut effects = vec![Effect::CloseMenu];
        if target.is_home() {
            effects.push(Effect::ScrollToTop(ScrollReset::Navigation));
        }
        if entered {
            effects.extend(Self::mount_effects(target));
        }
        effects
    }

    /// Effects of a view's page being mounted, whichever way it got there.
    pub fn mount_effects(view: View) -> Vec<Effect> {
        match view {
            View::Portfolio => vec![Effect::ScrollToTop(ScrollReset::PortfolioMounted)],
            View::Home => Vec::new(),
        }
    }
}

/// An entry in the navigation menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: View,
}

/// Menu entries, desktop and mobile alike. Only "Portfolio" has a page of its
/// own; the other entries lead back home.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Portfolio",
        target: View::Portfolio,
    },
    NavItem {
        label: "Expertise",
        target: View::Home,
    },
    NavItem {
        label: "Team",
        target: View::Home,
    },
    NavItem {
        label: "About",
        target: View::Home,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn starts_home() {
        assert_eq!(ViewSwitch::default().current(), View::Home);
    }

    #[test]
    fn portfolio_resets_scroll_on_mount() {
        let mut switch = ViewSwitch::default();
        let effects = switch.navigate_to(View::Portfolio);
        assert_eq!(switch.current(), View::Portfolio);
        assert_eq!(
            effects,
            vec![
                Effect::CloseMenu,
                Effect::ScrollToTop(ScrollReset::PortfolioMounted)
            ]
        );
    }

    #[test]
    fn home_always_resets_scroll() {
        let mut switch = ViewSwitch::default();
        switch.navigate_to(View::Portfolio);

        let effects = switch.navigate_to(View::Home);
        assert_eq!(switch.current(), View::Home);
        assert!(effects.contains(&Effect::ScrollToTop(ScrollReset::Navigation)));

        // already home: same state, same effects
        let again = switch.navigate_to(View::Home);
        assert_eq!(switch.current(), View::Home);
        assert_eq!(again, effects);
    }

    #[test]
    fn only_the_home_reset_belongs_to_the_navigation_handler() {
        let mut switch = ViewSwitch::default();
        let to_portfolio = switch.navigate_to(View::Portfolio);
        assert!(!to_portfolio.iter().any(Effect::is_navigation_scroll_reset));

        let to_home = switch.navigate_to(View::Home);
        let handled: Vec<_> = to_home
            .iter()
            .filter(|effect| effect.is_navigation_scroll_reset())
            .collect();
        assert_eq!(handled, [&Effect::ScrollToTop(ScrollReset::Navigation)]);
        assert!(!Effect::CloseMenu.is_navigation_scroll_reset());
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn parses_view_names() {
        assert_eq!(View::from_str("portfolio"), Ok(View::Portfolio));
        assert_eq!(View::from_str("Home"), Ok(View::Home));
        assert_eq!(View::from_str("team"), Err(ParseViewError::VariantNotFound));
        assert_eq!(View::Portfolio.to_string(), "portfolio");
    }

    #[test]
    fn only_portfolio_item_leaves_home() {
        let leaving: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| item.target.is_portfolio())
            .map(|item| item.label)
            .collect();
        assert_eq!(leaving, vec!["Portfolio"]);
    }
}
