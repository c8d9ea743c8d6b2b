//! Events view — renders events to an output stream.
//!
//! The view owns its writer, so `&mut self` serializes records; callers
//! sharing one stream across threads must wrap the view themselves.
//! Rendering never fails: write errors are logged and dropped.

use std::io::Write;

use tracing::warn;

use super::RendererRegistry;
use crate::config::ViewConfig;
use crate::event::Event;
use crate::style::Styler;

/// The host session, asked to redraw after new output.
pub trait Session {
    fn refresh(&self);
}

impl<F: Fn()> Session for F {
    fn refresh(&self) {
        self()
    }
}

/// Renders events to `out` and optionally refreshes `session`.
pub struct EventsView<W: Write, S: Session> {
    registry: RendererRegistry,
    styler: Box<dyn Styler>,
    out: W,
    session: S,
}

impl<W: Write, S: Session> EventsView<W, S> {
    pub fn new(out: W, session: S, styler: Box<dyn Styler>, config: &ViewConfig) -> Self {
        Self {
            registry: RendererRegistry::new(config),
            styler,
            out,
            session,
        }
    }

    /// Render one event, then refresh the session if asked to.
    pub fn render(&mut self, event: &Event, refresh: bool) {
        let record = self.registry.render(event, self.styler.as_ref());
        if let Err(e) = writeln!(self.out, "{record}").and_then(|()| self.out.flush()) {
            warn!(tag = %event.tag, "failed to write event: {e}");
        }
        if refresh {
            self.session.refresh();
        }
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
