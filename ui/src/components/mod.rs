//! Shared building blocks used by both pages and by the page frame.
pub mod floating_cards;
pub mod footer;
pub mod icons;
pub mod loader;
pub mod logo;
pub mod marquee;
pub mod navbar;
pub mod portfolio_card;
pub mod reveal;
