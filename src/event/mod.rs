//! Session events — the tagged records the view renders.
//!
//! An event's tag is a dot-namespaced string (`wifi.ap.new`,
//! `net.sniff.leak.http`) that selects a renderer. The payload is a sum
//! type, so a renderer matches the variant it expects instead of casting.

pub mod network;
pub mod sniff;

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::style::Styler;

pub use network::{AccessPoint, Endpoint};
pub use sniff::{SnifferData, SnifferEvent, SynScanEvent};

/// A single session event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub tag: String,
    pub time: DateTime<Local>,
    pub data: Payload,
}

impl Event {
    /// Create an event stamped with the current local time.
    pub fn new(tag: impl Into<String>, data: impl Into<Payload>) -> Self {
        Self::at(tag, Local::now(), data)
    }

    /// Create an event with an explicit timestamp.
    pub fn at(tag: impl Into<String>, time: DateTime<Local>, data: impl Into<Payload>) -> Self {
        Self {
            tag: tag.into(),
            time,
            data: data.into(),
        }
    }

    /// Short display label derived from the payload.
    ///
    /// Log events carry their colored severity; other events have no label.
    pub fn label(&self, styler: &dyn Styler) -> String {
        match &self.data {
            Payload::Log(msg) => msg.level.styled(styler),
            _ => String::new(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}: {}", self.tag, self.time.to_rfc3339(), self.data)
    }
}

/// Event payload, one variant per shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Payload {
    Log(LogMessage),
    AccessPoint(AccessPoint),
    Endpoint(Endpoint),
    Sniffer(SnifferEvent),
    SynScan(SynScanEvent),
    /// Free-form value, e.g. emitted by a module.
    Value(Value),
}

impl Payload {
    /// Human-readable name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Log(_) => "log message",
            Payload::AccessPoint(_) => "access point",
            Payload::Endpoint(_) => "endpoint",
            Payload::Sniffer(_) => "sniffer event",
            Payload::SynScan(_) => "syn scan event",
            Payload::Value(_) => "value",
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Log(msg) => write!(f, "[{}] {}", msg.level.name(), msg.message),
            Payload::AccessPoint(ap) => write!(f, "{ap}"),
            Payload::Endpoint(endpoint) => write!(f, "{endpoint}"),
            Payload::Sniffer(se) => write!(f, "{se}"),
            Payload::SynScan(se) => write!(f, "{se}"),
            Payload::Value(v) => write!(f, "{v}"),
        }
    }
}

impl From<LogMessage> for Payload {
    fn from(msg: LogMessage) -> Self {
        Payload::Log(msg)
    }
}

impl From<AccessPoint> for Payload {
    fn from(ap: AccessPoint) -> Self {
        Payload::AccessPoint(ap)
    }
}

impl From<Endpoint> for Payload {
    fn from(endpoint: Endpoint) -> Self {
        Payload::Endpoint(endpoint)
    }
}

impl From<SnifferEvent> for Payload {
    fn from(se: SnifferEvent) -> Self {
        Payload::Sniffer(se)
    }
}

impl From<SynScanEvent> for Payload {
    fn from(se: SynScanEvent) -> Self {
        Payload::SynScan(se)
    }
}

impl From<Value> for Payload {
    fn from(v: Value) -> Self {
        Payload::Value(v)
    }
}

/// Any value with a textual form.
///
/// Strings display verbatim, null displays as nothing, everything else
/// as compact JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(pub serde_json::Value);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            serde_json::Value::Null => Ok(()),
            other => write!(f, "{other}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value(serde_json::Value::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value(serde_json::Value::String(s))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value(v)
    }
}

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Important,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    /// Three-character console name.
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Debug => "dbg",
            LogLevel::Info => "inf",
            LogLevel::Important => "imp",
            LogLevel::Warning => "war",
            LogLevel::Error => "err",
            LogLevel::Fatal => "!!!",
        }
    }

    fn styled(self, styler: &dyn Styler) -> String {
        let name = self.name();
        match self {
            LogLevel::Debug => styler.dim(name),
            LogLevel::Info => styler.green(name),
            LogLevel::Important => styler.bold(name),
            LogLevel::Warning => styler.yellow(name),
            LogLevel::Error => styler.red(name),
            LogLevel::Fatal => styler.bold(&styler.red(name)),
        }
    }
}

/// Payload of `sys.log` events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    #[serde(default)]
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}
