use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostsConfig {
    /// Path of the `<domain> <address>` table loaded at startup.
    #[serde(default = "default_hosts_path")]
    pub path: String,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            path: default_hosts_path(),
        }
    }
}

fn default_hosts_path() -> String {
    "hosts.txt".to_string()
}
