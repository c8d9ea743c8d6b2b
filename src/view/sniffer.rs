//! Sniffer renderer, including the cleartext HTTP leak dump.

use std::fmt::Write as _;

use super::format::prefix;
use super::{EventRenderer, RenderError, RenderResult, Route};
use crate::event::{Event, Payload, SnifferData};
use crate::http::HttpRequest;
use crate::style::Styler;

/// Tag of sniffed HTTP requests that may carry credentials.
pub const HTTP_LEAK_TAG: &str = "net.sniff.leak.http";

/// Renders `net.sniff.*` events as `[time] [tag] message <misc>`.
pub struct SnifferRenderer {
    /// Largest body accepted for form parsing.
    form_limit: usize,
}

impl SnifferRenderer {
    pub fn new(form_limit: usize) -> Self {
        Self { form_limit }
    }

    /// Method, URL, headers and either the parsed form or the raw body.
    fn leak_details(&self, req: &HttpRequest, styler: &dyn Styler) -> String {
        let mut misc = String::from("\n\n");
        let _ = writeln!(misc, "  Method: {}", styler.yellow(&req.method));
        let _ = writeln!(misc, "  URL: {}", styler.yellow(&req.url));
        misc.push_str("  Headers:\n");
        for (name, values) in &req.headers {
            let _ = writeln!(misc, "    {} => {}", styler.green(name), values.join(", "));
        }

        match req.parse_form(self.form_limit) {
            Ok(form) => {
                misc.push_str("  \n  Form:\n\n");
                for (key, values) in &form {
                    let _ = writeln!(
                        misc,
                        "    {} => {}",
                        styler.green(key),
                        styler.bold(&values.join(", "))
                    );
                }
            }
            Err(e) => {
                tracing::debug!(url = %req.url, "form not parsed: {e}");
                if let Some(body) = &req.body {
                    let _ = writeln!(misc, "  \n  {}:\n\n    {}", styler.bold("Body"), body.text());
                }
            }
        }
        misc
    }
}

impl EventRenderer for SnifferRenderer {
    fn route(&self) -> Route {
        Route::Prefix("net.sniff.")
    }

    fn render(&self, event: &Event, styler: &dyn Styler) -> RenderResult<String> {
        let Payload::Sniffer(se) = &event.data else {
            return Err(RenderError::mismatch("sniffer event", &event.data));
        };

        let misc = match &se.data {
            Some(SnifferData::Http(req)) if event.tag == HTTP_LEAK_TAG => {
                if req.method == "GET" {
                    String::new()
                } else {
                    self.leak_details(req, styler)
                }
            }
            Some(data) => data.to_string(),
            None => String::new(),
        };

        Ok(format!("{} {} {misc}", prefix(event, styler), se.message))
    }
}
