//! pgplan launcher - re-executes the binary installed under `bin/` next to
//! this executable, forwarding arguments, streams and exit status.

use pgplan_bundler::launcher;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let exit_code = match launcher::run(std::env::args_os().skip(1)).await {
        Ok(code) => code,
        Err(e) if e.is_interrupted() => e.exit_code(),
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
