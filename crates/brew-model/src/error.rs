use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown category: {name}")]
    UnknownCategory { name: String },
    #[error("cannot infer category for {path}: no parent directory")]
    NoParentDirectory { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, ModelError>;
