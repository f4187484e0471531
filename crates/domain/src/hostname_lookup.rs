use std::fmt;
use std::net::Ipv4Addr;

/// Printed when no address argument is supplied.
pub const USAGE_MESSAGE: &str = "Please include an address";

/// Printed when the reverse lookup produced no hostname.
pub const NOT_FOUND_MESSAGE: &str = "Couldn't get hostname";

/// Outcome of a single reverse lookup.
///
/// Only the primary name is kept; aliases the platform may report are
/// not surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostnameLookup {
    pub address: Ipv4Addr,
    pub hostname: Option<String>,
}

impl HostnameLookup {
    pub fn found(address: Ipv4Addr, hostname: impl Into<String>) -> Self {
        let hostname = hostname.into();
        if hostname.trim().is_empty() {
            return Self::not_found(address);
        }
        Self {
            address,
            hostname: Some(hostname),
        }
    }

    pub fn not_found(address: Ipv4Addr) -> Self {
        Self {
            address,
            hostname: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.hostname.is_some()
    }
}

impl fmt::Display for HostnameLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hostname {
            Some(name) => write!(f, "Hostname: {name}"),
            None => f.write_str(NOT_FOUND_MESSAGE),
        }
    }
}
