use clap::Parser;
use hostd_domain::CliOverrides;
use std::process::ExitCode;
use tracing::{error, info};

mod bootstrap;
mod di;
mod error;
mod server;

use error::StartupError;

#[derive(Parser)]
#[command(name = "hostd")]
#[command(version)]
#[command(about = "hostd - authoritative DNS server answering A queries from a static hosts file")]
struct Cli {
    /// UDP port to listen on (default 5000)
    #[arg(short = 'p', long, value_parser = clap::value_parser!(u16).range(1..))]
    port: Option<u16>,

    /// Hosts file with `<domain> <ipv4>` lines (default hosts.txt)
    #[arg(short = 'f', long, value_name = "FILE")]
    hosts_file: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(StartupError::USAGE_EXIT_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(()) => {
            info!("Server shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Startup failed");
            eprintln!("hostd: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), StartupError> {
    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        hosts_path: cli.hosts_file,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting hostd v{}", env!("CARGO_PKG_VERSION"));

    let table = bootstrap::load_hosts(&config)?;
    let dns_services = di::DnsServices::new(&config, table);

    let bind_addr = config.bind_addr();
    let socket = server::bind_udp_socket(&bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    server::start_dns_server(socket, dns_services.handler, server::shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}
