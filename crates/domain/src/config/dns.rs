use crate::dns_record::DEFAULT_TTL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// TTL in seconds written on every answer record.
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self { ttl: default_ttl() }
    }
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}
