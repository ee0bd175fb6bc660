//! rax-vfs - Entry Point
//!
//! Interactive shell over an in-memory virtual file system.

use log::{error, info, warn};
use tokio::io::{self, BufReader};

use rax_vfs::Storage;
use rax_vfs::config::VfsConfig;
use rax_vfs::shell::run_session;
use rax_vfs::utils::logging::setup_logging;

#[tokio::main]
async fn main() {
    let loaded = VfsConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    setup_logging(&config.logging);

    if let Err(e) = &loaded {
        warn!("Failed to load configuration, using defaults: {}", e);
    }

    info!("Launching shell (name rules: {:?})", config.names);

    let storage = Storage::with_rules(&config.names);
    let reader = BufReader::new(io::stdin());
    let mut writer = io::stdout();

    if let Err(e) = run_session(&storage, &config.shell, reader, &mut writer).await {
        error!("Session ended with I/O error: {}", e);
        std::process::exit(1);
    }
}
