use hostd_domain::{ConfigError, HostsFileError};

/// Failures that stop the process before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Hosts(#[from] HostsFileError),

    #[error("Failed to bind UDP socket on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("DNS server error: {0}")]
    Serve(#[source] anyhow::Error),
}

impl StartupError {
    /// Exit code for bad arguments (including an invalid port).
    pub const USAGE_EXIT_CODE: u8 = 1;

    pub fn exit_code(&self) -> u8 {
        match self {
            StartupError::Config(_) => Self::USAGE_EXIT_CODE,
            StartupError::Hosts(_) => 2,
            StartupError::Bind { .. } => 3,
            StartupError::Serve(_) => 4,
        }
    }
}
