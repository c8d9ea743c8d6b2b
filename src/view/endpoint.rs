//! Network endpoint renderer.

use super::format::{paren_suffix, prefix};
use super::{EventRenderer, RenderError, RenderResult, Route};
use crate::event::{Endpoint, Event, Payload};
use crate::style::Styler;

/// Renders `endpoint.*` events.
pub struct EndpointRenderer;

impl EventRenderer for EndpointRenderer {
    fn route(&self) -> Route {
        Route::Prefix("endpoint.")
    }

    fn render(&self, event: &Event, styler: &dyn Styler) -> RenderResult<String> {
        let Payload::Endpoint(endpoint) = &event.data else {
            return Err(RenderError::mismatch("endpoint", &event.data));
        };
        let head = prefix(event, styler);

        let record = match event.tag.as_str() {
            "endpoint.new" => format!(
                "{head} Endpoint {} detected as {}{}.",
                styler.bold(&endpoint.ip_address),
                styler.green(&endpoint.hw_address),
                paren_suffix(&endpoint.vendor)
            ),
            "endpoint.lost" => format!(
                "{head} Endpoint {}{} lost.",
                styler.red(&endpoint.ip_address),
                paren_suffix(display_name(endpoint))
            ),
            _ => format!("{head} {endpoint}"),
        };
        Ok(record)
    }
}

/// Alias if set, else hostname (possibly empty).
fn display_name(endpoint: &Endpoint) -> &str {
    if endpoint.alias.is_empty() {
        &endpoint.hostname
    } else {
        &endpoint.alias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PlainStyler;

    fn render(tag: &str, endpoint: Endpoint) -> String {
        EndpointRenderer
            .render(&Event::new(tag, endpoint), &PlainStyler)
            .unwrap()
    }

    #[test]
    fn new_without_vendor() {
        let record = render("endpoint.new", Endpoint::new("192.168.1.7", "de:ad:be:ef:00:07"));
        assert!(record.ends_with("Endpoint 192.168.1.7 detected as de:ad:be:ef:00:07."));
        assert!(!record.contains(" ("));
    }

    #[test]
    fn new_with_vendor() {
        let endpoint = Endpoint::new("192.168.1.7", "de:ad:be:ef:00:07").with_vendor("Acme");
        let record = render("endpoint.new", endpoint);
        assert!(record.contains(" (Acme)"));
        assert!(record.ends_with("de:ad:be:ef:00:07 (Acme)."));
    }

    #[test]
    fn lost_prefers_alias_over_hostname() {
        let endpoint = Endpoint::new("10.0.0.9", "aa:aa:aa:aa:aa:09")
            .with_alias("printer")
            .with_hostname("hp-laserjet.lan");
        let record = render("endpoint.lost", endpoint);
        assert!(record.ends_with("Endpoint 10.0.0.9 (printer) lost."));
        assert!(!record.contains("hp-laserjet"));
    }

    #[test]
    fn lost_falls_back_to_hostname() {
        let endpoint = Endpoint::new("10.0.0.9", "aa:aa:aa:aa:aa:09").with_hostname("nas.lan");
        let record = render("endpoint.lost", endpoint);
        assert!(record.ends_with("Endpoint 10.0.0.9 (nas.lan) lost."));
    }

    #[test]
    fn lost_without_name() {
        let record = render("endpoint.lost", Endpoint::new("10.0.0.9", "aa:aa:aa:aa:aa:09"));
        assert!(record.ends_with("Endpoint 10.0.0.9 lost."));
    }

    #[test]
    fn other_tags_dump_endpoint() {
        let endpoint = Endpoint::new("10.0.0.9", "aa:aa:aa:aa:aa:09").with_vendor("Intel");
        let record = render("endpoint.changed", endpoint);
        assert!(record.ends_with("[endpoint.changed] 10.0.0.9 : aa:aa:aa:aa:aa:09 ( Intel )"));
    }
}
