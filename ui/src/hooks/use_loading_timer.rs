//=============================================================================
// File: src/hooks/use_loading_timer.rs
//=============================================================================

use std::time::Duration;

use dioxus::prelude::*;
use model::config::LoaderTiming;

use crate::compat;

/// Runs the loader clock for the lifetime of the calling component: reports
/// the splash delay once it has elapsed, then the exit fade once it has
/// played. The gate that receives these decides what they mean.
///
/// The task belongs to the caller's scope, so unmounting early cancels it
/// and nothing more is reported.
pub fn use_loading_timer(timing: LoaderTiming, on_elapsed: EventHandler<Duration>) {
    use_future(move || async move {
        for step in [timing.delay(), timing.exit_fade()] {
            compat::sleep(step).await;
            on_elapsed.call(step);
        }
    });
}
