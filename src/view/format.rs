//! Formatting shared by every renderer.

use crate::event::Event;
use crate::style::Styler;

/// Hour:minute:second, the leading column of every record.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// `[time] [tag]` — identical for all renderers.
pub fn prefix(event: &Event, styler: &dyn Styler) -> String {
    format!(
        "[{}] [{}]",
        event.time.format(TIME_FORMAT),
        styler.green(&event.tag)
    )
}

/// `" (text)"`, or nothing when `text` is empty.
pub fn paren_suffix(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!(" ({text})")
    }
}
