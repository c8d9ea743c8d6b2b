//! Sniffer and port-scan payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Value;
use crate::http::HttpRequest;

/// Something the packet sniffer wants to report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnifferEvent {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SnifferData>,
}

impl SnifferEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<SnifferData>) -> Self {
        self.data = Some(data.into());
        self
    }
}

impl fmt::Display for SnifferEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(data) = &self.data {
            write!(f, " {data}")?;
        }
        Ok(())
    }
}

/// Extra data attached to a sniffer event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SnifferData {
    /// A captured cleartext HTTP request.
    Http(HttpRequest),
    Value(Value),
}

impl fmt::Display for SnifferData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnifferData::Http(req) => write!(f, "{req}"),
            SnifferData::Value(v) => write!(f, "{v}"),
        }
    }
}

impl From<HttpRequest> for SnifferData {
    fn from(req: HttpRequest) -> Self {
        SnifferData::Http(req)
    }
}

impl From<Value> for SnifferData {
    fn from(v: Value) -> Self {
        SnifferData::Value(v)
    }
}

/// An open port found by the SYN scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynScanEvent {
    pub address: String,
    pub port: u16,
}

impl SynScanEvent {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }
}

impl fmt::Display for SynScanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}
