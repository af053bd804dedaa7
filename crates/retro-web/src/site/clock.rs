//! Taskbar clock

use retro_desktop::clock::CLOCK_REFRESH_MS;

use crate::console::warn;
use crate::dom::{by_id, local_timestamp, Interval};

fn update_time() {
    match by_id("time") {
        Some(el) => el.set_text_content(Some(&local_timestamp().clock_label())),
        None => warn("[desktop] Element with id 'time' not found"),
    }
}

/// Render the clock now and every minute after
pub(crate) fn start_clock() -> Option<Interval> {
    update_time();
    match Interval::new(CLOCK_REFRESH_MS, update_time) {
        Ok(interval) => Some(interval),
        Err(e) => {
            warn(&format!("[desktop] Clock timer failed: {:?}", e));
            None
        }
    }
}
