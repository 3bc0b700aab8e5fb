use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{}: {source}", .path.display())]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
