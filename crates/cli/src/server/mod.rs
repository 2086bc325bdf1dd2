pub mod dns;

pub use dns::{bind_udp_socket, shutdown_signal, start_dns_server};
