//! fileman - an interactive shell for navigating the local filesystem

use std::env;
use std::process;

mod confirm;
mod errors;
mod fs;
mod session;

use confirm::StdinConfirm;
use session::Session;

fn main() {
    // Diagnostics stay off the interactive channel unless RUST_LOG asks.
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .compact()
        .init();

    let start_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Error: cannot determine the working directory: {err}");
            process::exit(1);
        }
    };

    let mut session = Session::new(start_dir);
    if let Err(err) = session.run(&mut StdinConfirm) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
