use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors the user gets to see. Everything else is swallowed at the block boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported shell `{0}`, expected `bash` or `zsh`")]
    UnsupportedShell(String),

    #[error("Could not read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
