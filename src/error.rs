use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration appeared at {path} before it could be written, not overwriting")]
    ConfigWriteConflict { path: PathBuf },

    #[error("post already exists at {path}, not overwriting")]
    ArticleWriteConflict { path: PathBuf },

    #[error("unable to create directory {path}: {source}")]
    DirectoryCreation { path: PathBuf, source: io::Error },

    #[error("unable to parse date: {value}")]
    DateParse { value: String },

    #[error("unrecognized token '{token}' in time format '{pattern}'")]
    TimeFormat { pattern: String, token: String },

    #[error("prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("error serializing front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("error serializing configuration: {0}")]
    Json(#[from] serde_json::Error),
}
