//! gradle-setup configuration layer
//!
//! Every environment variable read goes through this module so that the rest
//! of the workspace works with typed config instead of `std::env::var`.
//!
//! - `loader`: env_or, env_optional, env_bool helpers
//! - `schema`: ObservabilityConfig
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or};
pub use schema::ObservabilityConfig;
