//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use campus_cli::CliError;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match campus_cli::run().await {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("campus: {err}");
            std::process::exit(1);
        }
    }
}
