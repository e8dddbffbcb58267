use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing alias for resource: {0}")]
    MissingAlias(String),

    #[error("Failed to stat resource: {}", .0.display())]
    Stat(PathBuf, #[source] std::io::Error),

    #[error("Failed to read resource: {}", .0.display())]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to create file: {}", .0.display())]
    Create(PathBuf, #[source] std::io::Error),

    #[error("Failed to write file: {}", .0.display())]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to open manifest: {}", .0.display())]
    ManifestOpen(PathBuf, #[source] std::io::Error),

    #[error("Cannot parse manifest: {}", .0.display())]
    Manifest(PathBuf, #[source] serde_yaml::Error),

    #[error("Symbol `{symbol}` is produced by both `{first}` and `{second}`")]
    SymbolCollision {
        symbol: String,
        first: String,
        second: String,
    },
}
