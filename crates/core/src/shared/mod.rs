pub mod config_loader;
pub mod constants;
