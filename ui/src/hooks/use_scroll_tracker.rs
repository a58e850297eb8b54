//=============================================================================
// File: src/hooks/use_scroll_tracker.rs
//=============================================================================

// Conditionally export the correct module based on the target platform,
// following the pattern in `compat.rs`.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use self::webview::*;

/// # WebAssembly (WASM) Implementation
/// Listens on `window` through `web_sys`. The listener pushes offsets into a
/// channel drained by a component task, so signal writes always happen
/// inside the Dioxus runtime. The listener is removed when the component
/// is dropped.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::prelude::*;
    use dioxus_logger::tracing;
    use futures::StreamExt;
    use futures_channel::mpsc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::compat;
    use crate::page_state::PageState;

    type Listener = Rc<Closure<dyn FnMut()>>;

    pub fn use_scroll_tracker(mut page: PageState) {
        let (tx, rx) = use_hook(|| {
            let (tx, rx) = mpsc::unbounded::<f64>();
            (tx, Rc::new(RefCell::new(Some(rx))))
        });

        let listener: Option<Listener> = use_hook(move || {
            let window = web_sys::window()?;
            let closure = Closure::<dyn FnMut()>::new(move || {
                let _ = tx.unbounded_send(compat::scroll_offset());
            });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            ) {
                tracing::warn!("could not subscribe to scroll events: {e:?}");
                return None;
            }
            Some(Rc::new(closure))
        });

        use_future(move || {
            let rx = rx.borrow_mut().take();
            async move {
                page.on_scroll(compat::scroll_offset());
                let Some(mut rx) = rx else {
                    return;
                };
                while let Some(offset) = rx.next().await {
                    page.on_scroll(offset);
                }
            }
        });

        use_drop(move || {
            if let (Some(window), Some(listener)) = (web_sys::window(), listener) {
                let callback: &Closure<dyn FnMut()> = &listener;
                let _ = window
                    .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }
        });
    }
}

/// # Webview Implementation (desktop, mobile)
/// Bridges the webview's scroll events through `document::eval`. The script
/// keeps its handler on `window` so the drop hook can remove it.
#[cfg(not(target_arch = "wasm32"))]
mod webview {
    use dioxus::prelude::*;

    use crate::page_state::PageState;

    const SUBSCRIBE_JS: &str = r#"
        const report = () => dioxus.send(window.scrollY);
        window.__tcapitalScroll = report;
        window.addEventListener("scroll", report, { passive: true });
        report();
        await new Promise(() => {});
    "#;

    const UNSUBSCRIBE_JS: &str = r#"
        if (window.__tcapitalScroll) {
            window.removeEventListener("scroll", window.__tcapitalScroll);
            delete window.__tcapitalScroll;
        }
    "#;

    pub fn use_scroll_tracker(mut page: PageState) {
        use_future(move || async move {
            let mut bridge = document::eval(SUBSCRIBE_JS);
            while let Ok(offset) = bridge.recv::<f64>().await {
                page.on_scroll(offset);
            }
        });

        use_drop(|| {
            let _ = document::eval(UNSUBSCRIBE_JS);
        });
    }
}
