//! `sys.log` renderer.

use super::format::prefix;
use super::{EventRenderer, RenderError, RenderResult, Route};
use crate::event::{Event, Payload};
use crate::style::Styler;

/// Renders `[time] [tag] [label] message`.
pub struct LogRenderer;

impl EventRenderer for LogRenderer {
    fn route(&self) -> Route {
        Route::Exact("sys.log")
    }

    fn render(&self, event: &Event, styler: &dyn Styler) -> RenderResult<String> {
        let Payload::Log(msg) = &event.data else {
            return Err(RenderError::mismatch("log message", &event.data));
        };
        Ok(format!(
            "{} [{}] {}",
            prefix(event, styler),
            event.label(styler),
            msg.message
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{LogLevel, LogMessage};
    use crate::style::PlainStyler;
    use chrono::{Local, TimeZone};

    #[test]
    fn render_log_line() {
        let time = Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 1).unwrap();
        let event = Event::at(
            "sys.log",
            time,
            LogMessage::new(LogLevel::Error, "arp.spoof: no targets"),
        );
        let record = LogRenderer.render(&event, &PlainStyler).unwrap();
        assert_eq!(record, "[12:00:01] [sys.log] [err] arp.spoof: no targets");
    }
}
