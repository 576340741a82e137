//! Configuration — optional JSON file plus env var overrides.
//!
//! # Usage
//! ```no_run
//! use telenote::config;
//!
//! let cfg = config::load_config(None);
//! println!("Parse mode: {:?}", cfg.parse_mode);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{get_config_path, load_config, save_config};
pub use schema::Config;
