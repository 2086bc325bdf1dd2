mod loader;

pub use loader::{load_hosts_file, parse_hosts};
