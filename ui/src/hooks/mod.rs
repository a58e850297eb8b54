pub mod use_loading_timer;
pub mod use_scroll_tracker;
