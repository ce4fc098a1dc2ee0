use error_iter::ErrorIter as _;
use log::error;
use winit::error::{EventLoopError, OsError};

/// Everything that can stop the window from coming up or staying up. None of
/// it is recoverable.
#[derive(Debug, thiserror::Error)]
pub enum AnimateError {
    #[error("event loop failed")]
    EventLoop(#[from] EventLoopError),
    #[error("window creation failed")]
    Window(#[from] OsError),
    #[error("pixel surface failed")]
    Pixels(#[from] pixels::Error),
    #[error("surface resize failed")]
    Texture(#[from] pixels::TextureError),
}

pub fn log_error<E: std::error::Error + 'static>(method_name: &str, err: &E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
