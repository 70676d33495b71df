pub mod config;
pub mod serve;

pub use config::print_config;
pub use serve::serve;
