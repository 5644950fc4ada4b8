//! Replay a recorded action script (native).
//!
//! Usage: `whiteboard <script.json> [config.json]`

use std::path::PathBuf;
use whiteboard_app::{AppConfig, AppError, load_script, replay};

fn main() {
    env_logger::init();
    log::info!("Starting whiteboard replay");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let script_path = args.next().ok_or(AppError::Usage)?;
    let config = match args.next() {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };

    let steps = load_script(&script_path)?;
    let state = replay(&config, steps)?;
    println!("{}", state.to_json()?);
    Ok(())
}
