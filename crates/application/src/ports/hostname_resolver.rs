use async_trait::async_trait;
use rlookup_domain::DomainError;
use std::net::Ipv4Addr;

#[async_trait]
pub trait HostnameResolver: Send + Sync {
    /// Reverse-resolves `ip`. `Ok(None)` means the platform knows no name
    /// for the address; `Err` is reserved for resolver malfunctions.
    async fn resolve_hostname(&self, ip: Ipv4Addr) -> Result<Option<String>, DomainError>;
}
