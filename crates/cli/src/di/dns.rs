use hostd_application::use_cases::ResolveNamesUseCase;
use hostd_domain::{Config, HostsTable};
use hostd_infrastructure::dns::DnsServerHandler;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config, table: HostsTable) -> Self {
        info!(entries = table.len(), ttl = config.dns.ttl, "Initializing DNS services");

        let table = Arc::new(table);
        let use_case = Arc::new(ResolveNamesUseCase::new(table));
        let handler = DnsServerHandler::new(use_case, config.dns.ttl);

        Self { handler }
    }
}
