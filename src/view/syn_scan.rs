//! Port scanner renderer.

use super::format::prefix;
use super::{EventRenderer, RenderError, RenderResult, Route};
use crate::event::{Event, Payload};
use crate::style::Styler;

/// Renders `syn.scan*` hits.
pub struct SynScanRenderer;

impl EventRenderer for SynScanRenderer {
    fn route(&self) -> Route {
        Route::Prefix("syn.scan")
    }

    fn render(&self, event: &Event, styler: &dyn Styler) -> RenderResult<String> {
        let Payload::SynScan(hit) = &event.data else {
            return Err(RenderError::mismatch("syn scan event", &event.data));
        };
        Ok(format!(
            "{} Found open port {} for {}",
            prefix(event, styler),
            hit.port,
            styler.bold(&hit.address)
        ))
    }
}
