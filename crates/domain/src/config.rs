pub mod dns;
pub mod errors;
pub mod hosts;
pub mod logging;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use hosts::HostsConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
