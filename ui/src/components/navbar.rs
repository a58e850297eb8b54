//=============================================================================
// File: src/components/navbar.rs
//=============================================================================
use dioxus::prelude::*;
use model::site::NavbarPlan;
use model::view::NAV_ITEMS;
use model::View;

use crate::components::icons::Icon;
use crate::components::icons::IconKind;
use crate::components::logo::LogoMark;
use crate::page_state::use_app_config;
use crate::page_state::use_page_state;

/// Fixed top bar. Turns solid once the page is scrolled past the threshold
/// and collapses into a full-height overlay menu on small screens. Any
/// navigation, from here or elsewhere on the page, closes the menu.
#[component]
pub fn Navbar() -> Element {
    let mut page = use_page_state();
    let config = use_app_config();
    let plan = use_memo(move || page.navbar_plan());
    let Some(NavbarPlan {
        scrolled,
        current: current_view,
        menu_open: is_open,
    }) = plan()
    else {
        return rsx! {};
    };

    let mut handle_nav_click = move |target: View| page.navigate_to(target);

    let nav_class = if scrolled { "navbar scrolled" } else { "navbar" };

    rsx! {
        nav {
            class: "{nav_class}",
            div {
                class: "navbar-inner",
                a {
                    class: "brand",
                    href: "{config.base_path}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        handle_nav_click(View::Home);
                    },
                    LogoMark {}
                    span { class: "brand-name", "TCapital" }
                }

                div {
                    class: "desktop-menu",
                    for item in NAV_ITEMS {
                        button {
                            key: "{item.label}",
                            class: if item.target.is_portfolio() && current_view.is_portfolio() {
                                "nav-link active"
                            } else {
                                "nav-link"
                            },
                            onclick: move |_| handle_nav_click(item.target),
                            "{item.label}"
                            span { class: "nav-underline" }
                        }
                    }
                    button { class: "pitch-button", "Pitch Us" }
                }

                button {
                    class: "menu-toggle",
                    "aria-label": if is_open { "Close menu" } else { "Open menu" },
                    "aria-expanded": "{is_open}",
                    onclick: move |_| page.toggle_menu(),
                    if is_open {
                        Icon { kind: IconKind::X }
                    } else {
                        Icon { kind: IconKind::Menu }
                    }
                }
            }

            if is_open {
                div {
                    class: "mobile-menu",
                    div {
                        class: "mobile-menu-items",
                        for item in NAV_ITEMS {
                            button {
                                key: "{item.label}",
                                class: "mobile-link",
                                onclick: move |_| handle_nav_click(item.target),
                                "{item.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
