//! Generic renderer — fallback for unclaimed tags.

use super::format::prefix;
use super::RenderError;
use crate::event::Event;
use crate::style::Styler;

/// Fallback renderer: `[time] [tag] <event>`.
pub struct GenericRenderer;

impl GenericRenderer {
    pub fn record(&self, event: &Event, styler: &dyn Styler) -> String {
        format!("{} {event}", prefix(event, styler))
    }

    /// One line describing an event its renderer could not handle.
    pub fn diagnostic(&self, event: &Event, err: &RenderError, styler: &dyn Styler) -> String {
        format!("{} {event} ({err})", prefix(event, styler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Value;
    use crate::style::PlainStyler;

    #[test]
    fn generic_any_tag() {
        let event = Event::new("gps.fix", Value(serde_json::json!({"lat": 1.5})));
        let record = GenericRenderer.record(&event, &PlainStyler);
        assert!(record.contains("[gps.fix] gps.fix @ "));
        assert!(record.ends_with(r#": {"lat":1.5}"#));
    }

    #[test]
    fn diagnostic_includes_error() {
        let event = Event::new("syn.scan", Value::from("junk"));
        let err = RenderError::mismatch("syn scan event", &event.data);
        let line = GenericRenderer.diagnostic(&event, &err, &PlainStyler);
        assert!(line.ends_with("(payload mismatch: expected syn scan event, found value)"));
    }
}
