use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to read input file {}: {source}", .path.display())]
    InputIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed input on line {line}: {reason}")]
    InputFormat { line: usize, reason: String },

    #[error("no loads to assign")]
    NoLoadsToAssign,

    #[error("nearest neighbour requested over an empty candidate set")]
    EmptyCandidateSet,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to write csv report: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DispatchError>;
