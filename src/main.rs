//! pgplan_bundler_wheel - packages a prebuilt pgplan binary into a pip wheel.
//!
//! Usage: `pgplan_bundler_wheel <version> <binary_path> <platform_tag>`

use pgplan_bundler::cli::{self, OutputManager, WHEEL_USAGE};
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) if e.is_usage() => {
            log::debug!("{e}");
            let _ = OutputManager::default().usage(WHEEL_USAGE);
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
