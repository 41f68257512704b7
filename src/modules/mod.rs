pub mod config;
pub mod logger;

pub use config::{load_proxy_config, load_proxy_config_from};
pub use logger::init_logger;
