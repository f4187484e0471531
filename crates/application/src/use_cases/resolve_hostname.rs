use crate::ports::HostnameResolver;
use rlookup_domain::{AddressParseMode, DomainError, HostnameLookup, LookupAddress};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ResolveHostnameUseCase {
    hostname_resolver: Arc<dyn HostnameResolver>,
    parse_mode: AddressParseMode,
}

impl ResolveHostnameUseCase {
    pub fn new(hostname_resolver: Arc<dyn HostnameResolver>, parse_mode: AddressParseMode) -> Self {
        Self {
            hostname_resolver,
            parse_mode,
        }
    }

    /// Parses `address` and reverse-resolves it.
    ///
    /// Only a malformed address is an error. Resolver failures are
    /// reported as a lookup without a hostname.
    pub async fn execute(&self, address: &str) -> Result<HostnameLookup, DomainError> {
        let address = LookupAddress::parse(address, self.parse_mode)?;
        let ip = address.ip();

        debug!(ip = %ip, mode = ?self.parse_mode, "Resolving hostname");

        match self.hostname_resolver.resolve_hostname(ip).await {
            Ok(Some(hostname)) => {
                debug!(ip = %ip, hostname = %hostname, "Hostname resolved");
                Ok(HostnameLookup::found(ip, hostname))
            }
            Ok(None) => {
                debug!(ip = %ip, "No hostname found");
                Ok(HostnameLookup::not_found(ip))
            }
            Err(e) => {
                warn!(error = %e, ip = %ip, "Hostname resolution failed");
                Ok(HostnameLookup::not_found(ip))
            }
        }
    }
}
