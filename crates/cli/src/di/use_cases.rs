use rlookup_application::use_cases::ResolveHostnameUseCase;
use rlookup_domain::Config;
use rlookup_infrastructure::system::SystemHostnameResolver;
use std::sync::Arc;

pub struct UseCases {
    pub resolve_hostname: Arc<ResolveHostnameUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let hostname_resolver = Arc::new(SystemHostnameResolver::new());

        Self {
            resolve_hostname: Arc::new(ResolveHostnameUseCase::new(
                hostname_resolver,
                config.lookup.parse_mode,
            )),
        }
    }
}
