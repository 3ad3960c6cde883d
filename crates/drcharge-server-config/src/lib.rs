// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Dr. Charge server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`DRCHARGE_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use drcharge_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use drcharge_common_i18n::LocaleConfig;
use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub i18n: I18nConfig,
	/// `i18n` checked against the closed locale set.
	pub locales: LocaleConfig,
	pub site: SiteConfig,
	pub paths: PathsConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`DRCHARGE_SERVER_*`)
/// 2. Config file (`/etc/drcharge/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let i18n = layer.i18n.unwrap_or_default().finalize();
	let site = layer.site.unwrap_or_default().finalize();
	let paths = layer.paths.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	let locales = validate_config(&i18n, &site)?;

	info!(
		host = %http.host,
		port = http.port,
		default_locale = %locales.default_locale(),
		locales = ?i18n.locales,
		public_dir = %paths.public_dir,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		i18n,
		locales,
		site,
		paths,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(i18n: &I18nConfig, site: &SiteConfig) -> Result<LocaleConfig, ConfigError> {
	if !site.contact_email.contains('@') {
		return Err(ConfigError::InvalidValue {
			key: "site.contact_email".to_string(),
			message: format!("'{}' is not an email address", site.contact_email),
		});
	}

	for prefix in &i18n.exempt_prefixes {
		if !prefix.starts_with('/') {
			return Err(ConfigError::InvalidValue {
				key: "i18n.exempt_prefixes".to_string(),
				message: format!("'{prefix}' must start with '/'"),
			});
		}
	}

	i18n.locale_config()
}
