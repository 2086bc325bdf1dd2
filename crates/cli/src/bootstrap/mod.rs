mod config;
mod logging;

pub use config::{load_config, load_hosts};
pub use logging::init_logging;
