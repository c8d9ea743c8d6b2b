//! WiFi access point renderer.

use super::format::{paren_suffix, prefix};
use super::{EventRenderer, RenderError, RenderResult, Route};
use crate::event::{Event, Payload};
use crate::style::Styler;

/// Renders `wifi.ap.*` events.
pub struct AccessPointRenderer;

impl EventRenderer for AccessPointRenderer {
    fn route(&self) -> Route {
        Route::Prefix("wifi.ap.")
    }

    fn render(&self, event: &Event, styler: &dyn Styler) -> RenderResult<String> {
        let Payload::AccessPoint(ap) = &event.data else {
            return Err(RenderError::mismatch("access point", &event.data));
        };
        let head = prefix(event, styler);

        let record = match event.tag.as_str() {
            "wifi.ap.new" => format!(
                "{head} WiFi access point {} detected as {}{}.",
                styler.bold(&ap.essid),
                styler.green(&ap.bssid),
                paren_suffix(&ap.vendor)
            ),
            "wifi.ap.lost" => format!(
                "{head} WiFi access point {} ({}) lost.",
                styler.red(&ap.essid),
                ap.bssid
            ),
            _ => format!("{head} {ap}"),
        };
        Ok(record)
    }
}
