//! Tag-routed event renderers.
//!
//! Renderers register a `Route` (exact tag or tag prefix). The registry
//! walks them in order and the first match wins; `GenericRenderer`
//! handles every tag nobody claims, so each event produces a record.

pub mod access_point;
pub mod endpoint;
pub mod error;
pub mod format;
pub mod generic;
pub mod log;
pub mod module;
pub mod sniffer;
pub mod stream;
pub mod syn_scan;

use tracing::warn;

use crate::config::ViewConfig;
use crate::event::Event;
use crate::style::Styler;

pub use error::{RenderError, RenderResult};
pub use stream::{EventsView, Session};

/// Which tags a renderer claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Exact(&'static str),
    Prefix(&'static str),
}

impl Route {
    pub fn matches(self, tag: &str) -> bool {
        match self {
            Route::Exact(t) => tag == t,
            Route::Prefix(p) => tag.starts_with(p),
        }
    }
}

/// Turns one event family into a text record.
///
/// The record has no trailing newline; the view adds it.
pub trait EventRenderer: Send + Sync {
    /// Tags handled by this renderer.
    fn route(&self) -> Route;
    /// Render the event, or report that its payload is not the expected shape.
    fn render(&self, event: &Event, styler: &dyn Styler) -> RenderResult<String>;
}

/// Ordered renderers with fallback to generic.
pub struct RendererRegistry {
    renderers: Vec<Box<dyn EventRenderer>>,
    fallback: generic::GenericRenderer,
}

impl RendererRegistry {
    /// Create a registry with the built-in renderers.
    ///
    /// Order matters: the first route that matches a tag wins.
    pub fn new(config: &ViewConfig) -> Self {
        let renderers: Vec<Box<dyn EventRenderer>> = vec![
            Box::new(log::LogRenderer),
            Box::new(endpoint::EndpointRenderer),
            Box::new(access_point::AccessPointRenderer),
            Box::new(module::ModuleRenderer),
            Box::new(sniffer::SnifferRenderer::new(config.max_body_bytes)),
            Box::new(syn_scan::SynScanRenderer),
        ];
        Self {
            renderers,
            fallback: generic::GenericRenderer,
        }
    }

    /// First renderer whose route matches `tag`.
    pub fn route(&self, tag: &str) -> Option<&dyn EventRenderer> {
        self.renderers
            .iter()
            .find(|r| r.route().matches(tag))
            .map(|r| r.as_ref())
    }

    /// Render an event into a record.
    ///
    /// A payload that does not fit its tag degrades to a single
    /// diagnostic line through the generic renderer.
    pub fn render(&self, event: &Event, styler: &dyn Styler) -> String {
        let Some(renderer) = self.route(&event.tag) else {
            return self.fallback.record(event, styler);
        };
        match renderer.render(event, styler) {
            Ok(record) => record,
            Err(e) => {
                warn!(tag = %event.tag, "{e}");
                self.fallback.diagnostic(event, &e, styler)
            }
        }
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Endpoint, LogLevel, LogMessage, SnifferEvent, Value};
    use crate::http::HttpRequest;
    use crate::style::PlainStyler;

    #[test]
    fn route_exact_and_prefix() {
        assert!(Route::Exact("sys.log").matches("sys.log"));
        assert!(!Route::Exact("sys.log").matches("sys.log.extra"));
        assert!(Route::Prefix("syn.scan").matches("syn.scan"));
        assert!(Route::Prefix("syn.scan").matches("syn.scanner"));
        assert!(!Route::Prefix("endpoint.").matches("endpoint"));
    }

    #[test]
    fn routing_order() {
        let registry = RendererRegistry::default();
        let cases = [
            ("sys.log", Route::Exact("sys.log")),
            ("endpoint.new", Route::Prefix("endpoint.")),
            ("wifi.ap.lost", Route::Prefix("wifi.ap.")),
            ("mod.started", Route::Prefix("mod.")),
            ("net.sniff.dns", Route::Prefix("net.sniff.")),
            ("syn.scan", Route::Prefix("syn.scan")),
        ];
        for (tag, expected) in cases {
            let renderer = registry.route(tag).unwrap();
            assert_eq!(renderer.route(), expected, "tag {tag}");
        }
    }

    #[test]
    fn unclaimed_tags_have_no_route() {
        let registry = RendererRegistry::default();
        assert!(registry.route("sys.log.rotated").is_none());
        assert!(registry.route("wifi.client.new").is_none());
        assert!(registry.route("").is_none());
    }

    #[test]
    fn registry_dispatch_unknown() {
        let registry = RendererRegistry::default();
        let event = Event::new("ble.device.new", Value::from("beacon"));
        let record = registry.render(&event, &PlainStyler);
        assert!(record.contains("[ble.device.new]"));
        assert!(record.contains("beacon"));
    }

    #[test]
    fn mismatch_degrades_to_diagnostic() {
        let registry = RendererRegistry::default();
        let event = Event::new("endpoint.new", LogMessage::new(LogLevel::Info, "oops"));
        let record = registry.render(&event, &PlainStyler);
        assert!(record.contains("[endpoint.new]"));
        assert!(record.contains("payload mismatch: expected endpoint, found log message"));
        assert_eq!(record.lines().count(), 1);
    }

    #[test]
    fn configured_limit_reaches_form_parsing() {
        let config = ViewConfig {
            max_body_bytes: 4,
            ..ViewConfig::default()
        };
        let registry = RendererRegistry::new(&config);
        let req = HttpRequest::new("POST", "http://h/login")
            .with_header("Content-Type", "application/x-www-form-urlencoded")
            .with_body("user=admin");
        let event = Event::new("net.sniff.leak.http", SnifferEvent::new("POST").with_data(req));
        let record = registry.render(&event, &PlainStyler);
        assert!(record.contains("Body:\n\n    user=admin\n"));
        assert!(!record.contains("Form:"));
    }

    #[test]
    fn matching_payload_renders_normally() {
        let registry = RendererRegistry::default();
        let ok = Event::new("endpoint.new", Endpoint::new("10.0.0.2", "aa:aa:aa:aa:aa:aa"));
        assert!(registry.render(&ok, &PlainStyler).contains("Endpoint 10.0.0.2"));
    }
}
