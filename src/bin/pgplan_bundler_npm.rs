//! pgplan_bundler_npm - writes per-platform npm manifests for a release.
//!
//! Usage: `pgplan_bundler_npm <version> [--npm-dir <dir>]`

use pgplan_bundler::cli::{self, NPM_USAGE, OutputManager};
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    let exit_code = match cli::run_npm().await {
        Ok(code) => code,
        Err(e) if e.is_usage() => {
            log::debug!("{e}");
            let _ = OutputManager::default().usage(NPM_USAGE);
            1
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
