use thiserror::Error;

/// Errors a command handler can report back to the dispatch loop.
///
/// Each variant is one user-visible message category; `Io` is the
/// catch-all for unexpected host filesystem faults. None of these
/// terminate the session.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing argument: {0}.")]
    MissingArgument(&'static str),

    #[error("{0} not found.")]
    NotFound(String),

    #[error("{0} already exists.")]
    AlreadyExists(String),

    #[error("Cannot remove non-empty directory: {0}.")]
    NotEmptyDirectory(String),
}

pub type AppResult<T> = Result<T, AppError>;
