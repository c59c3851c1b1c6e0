//! # cmdcache - Infrastructure Layer
//!
//! Cross-cutting concerns that turn the application layer into something a
//! program can start.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML file, environment) |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`discovery`] | Cache endpoint resolution with default fallback |
//! | [`bootstrap`] | Builds a ready `MemoizedExecutor` from configuration |
//! | [`constants`] | File names, env prefixes and defaults |

// Force linkme registration of the built-in cache providers
extern crate cmdcache_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{build_executor, build_executor_with, create_cache_provider};
pub use config::{AppConfig, ConfigLoader};
pub use discovery::{ConfiguredEndpointResolver, resolve_or_default};
pub use error_ext::ErrorContext;
