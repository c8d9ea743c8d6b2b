//! Network entities discovered by the session.
//!
//! Snapshots owned by the discovery layer; the view only reads them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WiFi access point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPoint {
    /// Network name. Empty for hidden networks.
    #[serde(default)]
    pub essid: String,
    pub bssid: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub channel: u16,
    /// Signal strength in dBm, 0 when unknown.
    #[serde(default)]
    pub rssi: i16,
    #[serde(default)]
    pub encryption: String,
    #[serde(default)]
    pub clients: usize,
}

impl AccessPoint {
    pub fn new(essid: impl Into<String>, bssid: impl Into<String>) -> Self {
        Self {
            essid: essid.into(),
            bssid: bssid.into(),
            ..Self::default()
        }
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }
}

impl fmt::Display for AccessPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.bssid, self.essid)?;
        if !self.vendor.is_empty() {
            write!(f, " ( {} )", self.vendor)?;
        }
        if self.channel > 0 {
            write!(f, " ch {}", self.channel)?;
        }
        if self.rssi != 0 {
            write!(f, " {} dBm", self.rssi)?;
        }
        if !self.encryption.is_empty() {
            write!(f, " {}", self.encryption)?;
        }
        if self.clients > 0 {
            write!(f, " {} clients", self.clients)?;
        }
        Ok(())
    }
}

/// A host seen on the local network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub ip_address: String,
    pub hw_address: String,
    #[serde(default)]
    pub vendor: String,
    /// Operator-assigned name; wins over `hostname` for display.
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub hostname: String,
}

impl Endpoint {
    pub fn new(ip_address: impl Into<String>, hw_address: impl Into<String>) -> Self {
        Self {
            ip_address: ip_address.into(),
            hw_address: hw_address.into(),
            ..Self::default()
        }
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.ip_address.is_empty() {
            write!(f, "{} : ", self.ip_address)?;
        }
        f.write_str(&self.hw_address)?;
        if !self.vendor.is_empty() {
            write!(f, " ( {} )", self.vendor)?;
        }
        if !self.hostname.is_empty() {
            write!(f, " - {}", self.hostname)?;
        }
        Ok(())
    }
}
