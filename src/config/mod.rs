// Config layer - environment-driven configuration
pub mod logging;

pub use logging::init_logging;
