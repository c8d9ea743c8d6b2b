//! Module activity renderer — free-form payloads.

use super::format::prefix;
use super::{EventRenderer, RenderResult, Route};
use crate::event::Event;
use crate::style::Styler;

/// Renders `mod.*` events as `[time] [tag] <payload>`.
///
/// Modules may attach anything, so every payload shape is accepted.
pub struct ModuleRenderer;

impl EventRenderer for ModuleRenderer {
    fn route(&self) -> Route {
        Route::Prefix("mod.")
    }

    fn render(&self, event: &Event, styler: &dyn Styler) -> RenderResult<String> {
        Ok(format!("{} {}", prefix(event, styler), event.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{SynScanEvent, Value};
    use crate::style::PlainStyler;

    #[test]
    fn renders_value_verbatim() {
        let event = Event::new("mod.started", Value::from("net.probe"));
        let record = ModuleRenderer.render(&event, &PlainStyler).unwrap();
        assert!(record.ends_with("[mod.started] net.probe"));
    }

    #[test]
    fn accepts_structured_payloads() {
        let event = Event::new("mod.result", SynScanEvent::new("10.0.0.1", 22));
        let record = ModuleRenderer.render(&event, &PlainStyler).unwrap();
        assert!(record.ends_with("[mod.result] 10.0.0.1:22"));
    }
}
