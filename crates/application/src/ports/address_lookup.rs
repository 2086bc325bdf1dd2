use hostd_domain::HostsTable;
use std::net::Ipv4Addr;

/// Read-only source of name to address mappings.
///
/// Implementations are shared across concurrently handled datagrams and must
/// not require locking on the read path.
pub trait AddressLookup: Send + Sync {
    fn lookup(&self, name: &str) -> Option<Ipv4Addr>;
}

impl AddressLookup for HostsTable {
    fn lookup(&self, name: &str) -> Option<Ipv4Addr> {
        HostsTable::lookup(self, name)
    }
}
