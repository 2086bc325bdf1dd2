use hostd_infrastructure::dns::DnsServerHandler;
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

/// Receive buffer size; longer datagrams are truncated and fail decoding.
const RECV_BUF_LEN: usize = 4096;

pub async fn bind_udp_socket(bind_addr: &str) -> io::Result<UdpSocket> {
    let socket = UdpSocket::bind(bind_addr).await?;
    info!(bind_address = %socket.local_addr()?, "UDP socket bound");
    Ok(socket)
}

/// Completes on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Runs the receive loop until `shutdown` completes.
///
/// A single task reads the socket; each datagram is handled and answered in
/// its own task. Receive and send failures are logged and never stop the
/// loop.
pub async fn start_dns_server(
    socket: UdpSocket,
    handler: DnsServerHandler,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let local_addr = socket.local_addr()?;
    let socket = Arc::new(socket);
    let handler = Arc::new(handler);
    let mut recv_buf = [0u8; RECV_BUF_LEN];

    tokio::pin!(shutdown);

    info!(bind_address = %local_addr, "DNS server ready");

    loop {
        tokio::select! {
            result = socket.recv_from(&mut recv_buf) => {
                let (n, from) = match result {
                    Ok(received) => received,
                    Err(e) => {
                        warn!(error = %e, "UDP recv error");
                        continue;
                    }
                };

                let datagram = recv_buf[..n].to_vec();
                let handler = Arc::clone(&handler);
                let socket = Arc::clone(&socket);

                tokio::spawn(async move {
                    debug!(client = %from, bytes = datagram.len(), "Datagram received");
                    let Some(response) = handler.handle_datagram(&datagram) else {
                        debug!(client = %from, "No reply for datagram");
                        return;
                    };
                    if let Err(e) = socket.send_to(&response, from).await {
                        warn!(client = %from, error = %e, "Failed to send response");
                    }
                });
            }
            _ = &mut shutdown => break,
        }
    }

    Ok(())
}
