// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use dioxus_logger::tracing;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Current vertical scroll offset of the page, 0 if unavailable.
    pub fn scroll_offset() -> f64 {
        web_sys::window()
            .and_then(|win| win.scroll_y().ok())
            .unwrap_or(0.0)
    }

    pub fn scroll_to_top() {
        match web_sys::window() {
            Some(win) => win.scroll_to_with_x_and_y(0.0, 0.0),
            None => tracing::warn!("scroll_to_top: no window"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus::prelude::*;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub fn scroll_to_top() {
        // fire and forget; the scroll listener reports the new offset
        let _ = document::eval("window.scrollTo(0, 0);");
    }
}
