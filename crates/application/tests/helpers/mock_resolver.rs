use async_trait::async_trait;
use rlookup_application::ports::HostnameResolver;
use rlookup_domain::DomainError;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MockHostnameResolver {
    responses: Arc<RwLock<HashMap<Ipv4Addr, Option<String>>>>,
    call_count: Arc<AtomicU64>,
    last_ip: Arc<RwLock<Option<Ipv4Addr>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockHostnameResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            last_ip: Arc::new(RwLock::new(None)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn with_entries(entries: Vec<(&str, &str)>) -> Self {
        let resolver = Self::new();
        for (ip, hostname) in entries {
            resolver.set_response(ip, Some(hostname)).await;
        }
        resolver
    }

    pub async fn set_response(&self, ip: &str, hostname: Option<&str>) {
        self.responses
            .write()
            .await
            .insert(ip.parse().unwrap(), hostname.map(|h| h.to_string()));
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn last_ip(&self) -> Option<Ipv4Addr> {
        *self.last_ip.read().await
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl HostnameResolver for MockHostnameResolver {
    async fn resolve_hostname(&self, ip: Ipv4Addr) -> Result<Option<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_ip.write().await = Some(ip);
        if *self.should_fail.read().await {
            return Err(DomainError::ResolverError(
                "Hostname resolution failed".to_string(),
            ));
        }
        Ok(self
            .responses
            .read()
            .await
            .get(&ip)
            .cloned()
            .unwrap_or(None))
    }
}
