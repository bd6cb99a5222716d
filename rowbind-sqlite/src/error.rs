use rowbind::{PreconditionError, ScanError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("record mapping error: {0}")]
    Precondition(#[from] PreconditionError),
}

impl From<ScanError<rusqlite::Error>> for Error {
    fn from(err: ScanError<rusqlite::Error>) -> Self {
        match err {
            ScanError::Precondition(e) => Self::Precondition(e),
            ScanError::Source(e) => Self::Sqlite(e),
        }
    }
}
