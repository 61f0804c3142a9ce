mod commands;
mod config;
mod contest;
mod error;
mod handlers;
mod models;
mod voting;

use config::Config;
use log::{error, info};
use std::io;

fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Scoring contest: max song id {}, output {:?}",
        config.max_song_id, config.output
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = handlers::run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock(), &config);

    if let Err(e) = result {
        error!("Failed to process input: {}", e);
        std::process::exit(1);
    }
}
