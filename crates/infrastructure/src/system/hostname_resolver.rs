use async_trait::async_trait;
use dns_lookup::LookupErrorKind;
use rlookup_application::ports::HostnameResolver;
use rlookup_domain::DomainError;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use tracing::debug;

#[cfg(unix)]
const NI_NAMEREQD: i32 = libc::NI_NAMEREQD;
#[cfg(windows)]
const NI_NAMEREQD: i32 = 0x04;

/// Reverse lookup through the platform name service (`getnameinfo`),
/// so hosts files, DNS and any other configured sources apply.
///
/// The call blocks the calling thread for as long as the platform
/// resolver takes; no timeout is imposed here.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHostnameResolver;

impl SystemHostnameResolver {
    pub fn new() -> Self {
        Self
    }
}

fn ip_to_reverse_domain(ip: &Ipv4Addr) -> String {
    let octets = ip.octets();
    format!(
        "{}.{}.{}.{}.in-addr.arpa",
        octets[3], octets[2], octets[1], octets[0]
    )
}

#[async_trait]
impl HostnameResolver for SystemHostnameResolver {
    async fn resolve_hostname(&self, ip: Ipv4Addr) -> Result<Option<String>, DomainError> {
        let reverse_domain = ip_to_reverse_domain(&ip);

        debug!(
            ip = %ip,
            reverse_domain = %reverse_domain,
            "Performing reverse lookup"
        );

        // NI_NAMEREQD: fail instead of echoing the numeric address back
        match dns_lookup::getnameinfo(&SocketAddr::from((ip, 0)), NI_NAMEREQD) {
            Ok((hostname, _)) => {
                debug!(ip = %ip, hostname = %hostname, "Reverse lookup successful");
                Ok(Some(hostname))
            }
            Err(e) => match e.kind() {
                LookupErrorKind::NoName | LookupErrorKind::Again | LookupErrorKind::Fail => {
                    debug!(ip = %ip, kind = ?e.kind(), "Reverse lookup returned no name");
                    Ok(None)
                }
                LookupErrorKind::System | LookupErrorKind::IO => {
                    let err = io::Error::from(e);
                    debug!(ip = %ip, error = %err, reverse_domain = %reverse_domain, "Reverse lookup failed");
                    Err(DomainError::IoError(err.to_string()))
                }
                kind => {
                    debug!(ip = %ip, kind = ?kind, reverse_domain = %reverse_domain, "Reverse lookup failed");
                    Err(DomainError::ResolverError(format!(
                        "getnameinfo failed: {}",
                        io::Error::from(e)
                    )))
                }
            },
        }
    }
}
