#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Str(String),

    // A referenced entity has no matching record
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown template helper {0}")]
    UnknownHelper(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    ParseIntError(#[from] std::num::ParseIntError),

    #[cfg(feature = "sqlite")]
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}

impl Error {
    /// The HTTP-style status an outer error boundary should report.
    pub fn status(&self) -> u16 {
        match self {
            Error::NotFound(_) => 404,
            Error::Json(_) | Error::UnknownHelper(_) => 400,
            Error::Str(_)
            | Error::Config(_)
            | Error::Io(_)
            | Error::ParseIntError(_) => 500,
            #[cfg(feature = "sqlite")]
            Error::Sqlx(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
