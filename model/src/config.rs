//! Timing and layout constants for the site, gathered in one place.

use std::env;
use std::time::Duration;

use dioxus_logger::tracing;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Base path the static bundle is served from.
pub const DEFAULT_BASE_PATH: &str = "/tcapital/";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("base path must start and end with '/': {0:?}")]
    BasePath(String),

    #[error("parallax range must be positive, got {0}")]
    ParallaxRange(f64),
}

/// Durations driving the loading splash.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoaderTiming {
    /// How long the splash stays up before the gate opens.
    pub delay_ms: u64,
    /// Fade-out of the splash once the gate has opened.
    pub exit_fade_ms: u64,
    /// Fade-in of the main content after the gate has opened.
    pub content_fade_ms: u64,
}

impl LoaderTiming {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn exit_fade(&self) -> Duration {
        Duration::from_millis(self.exit_fade_ms)
    }
}

impl Default for LoaderTiming {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            exit_fade_ms: 800,
            content_fade_ms: 1000,
        }
    }
}

/// Scroll distances, in layout units. The navbar threshold is not here: it
/// is fixed at [`crate::scroll::SCROLL_THRESHOLD`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Offset at which the hero artwork has fully faded out.
    pub parallax_range: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            parallax_range: 300.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_path: String,
    pub loader: LoaderTiming,
    pub scroll: ScrollConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            loader: LoaderTiming::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Builds a config from the defaults, with optional overrides read from
    /// environment variables. Only the native shells call this.
    ///
    /// # Environment Variables
    /// - `TCAPITAL_LOADER_DELAY_MS`: splash duration in milliseconds.
    ///
    /// A value that does not parse is logged and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(delay_ms) = parse_var::<u64>("TCAPITAL_LOADER_DELAY_MS") {
            config.loader.delay_ms = delay_ms;
        }

        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_path.starts_with('/') || !self.base_path.ends_with('/') {
            return Err(ConfigError::BasePath(self.base_path.clone()));
        }
        // written this way so NaN is rejected too
        if !(self.scroll.parallax_range > 0.0) {
            return Err(ConfigError::ParallaxRange(self.scroll.parallax_range));
        }
        Ok(())
    }

    /// Returns `self` if valid, otherwise logs the problem and falls back to
    /// the built-in defaults.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::warn!("invalid site config, using defaults: {e}");
                Self::default()
            }
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!("ignoring {name}={raw:?}: not a valid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.base_path, "/tcapital/");
        assert_eq!(config.loader.delay(), Duration::from_millis(2000));
        assert_eq!(config.loader.exit_fade(), Duration::from_millis(800));
        assert_eq!(config.scroll.parallax_range, 300.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_base_path_without_slashes() {
        let config = SiteConfig {
            base_path: "tcapital".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BasePath("tcapital".to_string()))
        );
        assert_eq!(config.or_default(), SiteConfig::default());
    }

    #[test]
    fn rejects_degenerate_parallax_range() {
        let mut config = SiteConfig::default();
        config.scroll.parallax_range = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::ParallaxRange(_))));

        let mut config = SiteConfig::default();
        config.scroll.parallax_range = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::ParallaxRange(_))));
    }

    #[test]
    fn navbar_threshold_is_not_tunable() {
        // Only this test touches the variable, so setting it is race-free.
        env::set_var("TCAPITAL_SCROLL_THRESHOLD", "100");
        let config = SiteConfig::from_env().or_default();
        env::remove_var("TCAPITAL_SCROLL_THRESHOLD");
        assert_eq!(config.scroll, ScrollConfig::default());

        let mut site = crate::Site::new(config);
        site.tick(Duration::from_millis(2000));
        site.on_scroll(60.0);
        let navbar = site.render_plan().main.expect("loaded").navbar;
        assert!(navbar.scrolled);
    }

    #[test]
    fn threshold_keys_in_json_are_ignored() {
        let config: SiteConfig =
            serde_json::from_str(r#"{ "scroll": { "threshold": 100.0, "parallax_range": 300.0 } }"#)
                .unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{ "loader": { "delay_ms": 500, "exit_fade_ms": 100, "content_fade_ms": 0 } }"#)
                .unwrap();
        assert_eq!(config.loader.delay_ms, 500);
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
        assert_eq!(config.scroll, ScrollConfig::default());
    }
}
