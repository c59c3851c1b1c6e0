//! Configuration types module

pub mod app;
pub mod cache;
pub mod executor;
pub mod logging;

pub use app::AppConfig;
pub use cache::CacheConfig;
pub use executor::ExecutorSettings;
pub use logging::LoggingConfig;
