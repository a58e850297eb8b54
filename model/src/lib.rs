//! Platform-free state and content for the TCapital site.
//!
//! Nothing in here knows about Dioxus or the browser. The `ui` crate binds
//! these types to signals, timers and scroll events.

pub mod config;
pub mod content;
pub mod loading;
pub mod scroll;
pub mod site;
pub mod view;

pub use config::ConfigError;
pub use config::SiteConfig;
pub use loading::LoaderPresence;
pub use loading::LoadingGate;
pub use loading::LoadingPhase;
pub use scroll::hero_opacity;
pub use scroll::ScrollState;
pub use site::RenderPlan;
pub use site::Site;
pub use view::Effect;
pub use view::MobileMenu;
pub use view::View;
pub use view::ViewSwitch;
