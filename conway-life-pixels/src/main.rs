#![deny(clippy::all)]
#![forbid(unsafe_code)]

use life_sim::Settings;
use log::info;
use pixels_main_support::{animate, log_error};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let settings = Settings::default();
    info!(
        "{}x{} cells at {} frames/s, {} frames per step",
        settings.grid_size.width,
        settings.grid_size.height,
        settings.frame_rate,
        settings.frames_per_step
    );

    match animate(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error("animate", &err);
            ExitCode::FAILURE
        }
    }
}
