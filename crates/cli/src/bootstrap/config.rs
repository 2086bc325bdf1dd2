use hostd_domain::{CliOverrides, Config, ConfigError, HostsFileError, HostsTable};
use hostd_infrastructure::hosts::load_hosts_file;
use tracing::{error, info};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn load_hosts(config: &Config) -> Result<HostsTable, HostsFileError> {
    info!(path = %config.hosts.path, "Loading hosts file");

    load_hosts_file(&config.hosts.path).map_err(|e| {
        error!(
            path = %config.hosts.path,
            line = e.line(),
            error = %e,
            "Failed to load hosts file"
        );
        e
    })
}
