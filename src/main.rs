//! vdrive - Entry Point
//!
//! Interactive console over an in-memory drive.

use log::{error, info};
use tokio::io::BufReader;

use vdrive::Drive;
use vdrive::config::DriveConfig;
use vdrive::error::handlers::handle_error;
use vdrive::session::run_session;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config_path = std::env::args().nth(1);
    let config = match DriveConfig::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut drive = Drive::from_config(&config);
    if config.seed_sample_folders {
        if let Err(e) = drive.seed_sample_folders() {
            handle_error(&e);
        }
    }

    info!("Launching vdrive console...");

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    match run_session(stdin, stdout, &mut drive, &config.prompt).await {
        Ok(downloads) => info!(
            "Session ended ({} download(s) requested)",
            downloads.requests().len()
        ),
        Err(e) => {
            error!("Console session failed: {}", e);
            std::process::exit(1);
        }
    }
}
