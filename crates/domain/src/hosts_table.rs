use crate::dns_name;
use crate::errors::DomainError;
use std::collections::HashMap;
use std::net::Ipv4Addr;

/// Immutable name to IPv4 address table.
///
/// Names are matched exactly and case-sensitively: `Example.com` and
/// `example.com` are different keys.
#[derive(Debug, Clone, Default)]
pub struct HostsTable {
    entries: HashMap<String, Ipv4Addr>,
}

impl HostsTable {
    /// Builds a table, rejecting invalid names and repeated domains.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (S, Ipv4Addr)>,
        S: Into<String>,
    {
        let mut builder = HostsTableBuilder::default();
        for (name, address) in entries {
            builder.insert(name, address)?;
        }
        Ok(builder.build())
    }

    pub fn builder() -> HostsTableBuilder {
        HostsTableBuilder::default()
    }

    pub fn lookup(&self, name: &str) -> Option<Ipv4Addr> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct HostsTableBuilder {
    entries: HashMap<String, Ipv4Addr>,
}

impl HostsTableBuilder {
    pub fn insert(&mut self, name: impl Into<String>, address: Ipv4Addr) -> Result<(), DomainError> {
        let name = name.into();
        dns_name::validate(&name)?;
        if self.entries.contains_key(&name) {
            return Err(DomainError::DuplicateDomain(name));
        }
        self.entries.insert(name, address);
        Ok(())
    }

    pub fn build(self) -> HostsTable {
        HostsTable {
            entries: self.entries,
        }
    }
}
