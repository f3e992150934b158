//! Configuration and file management for events-board and events-seed
//!
//! This crate provides:
//! - File path utilities for config and cache directories
//! - Configuration file discovery (TOML) and `.env` loading
//! - Application configuration ([`AppConfig`]) with environment overrides

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{ApiConfig, AppConfig, ConfigError, DatabaseConfig};
pub use config_file::{load_config_file, load_dotenv};
pub use paths::{app_config_path, cache_dir, config_dir};
