// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dr. Charge website server binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drcharge_server::{create_app_state, create_router, export_site};
use drcharge_server_config::ServerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod version;

/// Dr. Charge server - multi-locale website with static export.
#[derive(Parser, Debug)]
#[command(
	name = "drcharge-server",
	about = "Dr. Charge multi-locale website server",
	version
)]
struct Args {
	/// Configuration file (defaults to /etc/drcharge/server.toml)
	#[arg(long, global = true)]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Serve the site over HTTP (default)
	Serve,
	/// Render every page in every locale to static HTML
	Export {
		/// Output directory (overrides paths.export_dir)
		#[arg(long)]
		out_dir: Option<PathBuf>,
	},
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => drcharge_server_config::load_config_with_file(path)?,
		None => drcharge_server_config::load_config()?,
	};

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	match args.command {
		Some(Command::Export { out_dir }) => export(&config, out_dir),
		_ => serve(&config).await,
	}
}

fn export(config: &ServerConfig, out_dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
	let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(&config.paths.export_dir));
	let state = create_app_state(config);

	tracing::info!(out_dir = %out_dir.display(), "exporting static site");
	let report = export_site(&out_dir, state.locales(), &state.site)?;
	println!(
		"exported {} pages in {} locales to {}",
		report.pages,
		report.locales,
		out_dir.display()
	);
	Ok(())
}

async fn serve(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		default_locale = %config.locales.default_locale(),
		"starting drcharge-server"
	);

	let state = create_app_state(config);
	let app = create_router(state);

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
