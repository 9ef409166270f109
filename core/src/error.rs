//! Error types for the demonstration run.

use thiserror::Error;

use crate::names::NameListError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Name list error: {0}")]
    NameList(#[from] NameListError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
