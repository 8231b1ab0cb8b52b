use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordFreqError {
    #[error("chunk count must be at least 1, got {0}")]
    InvalidChunkCount(usize),
    #[error("counting unit for chunk {chunk} panicked: {message}")]
    WorkerPanicked { chunk: usize, message: String },
    #[error("parallel count with {chunk_count} chunks differs from sequential count")]
    Mismatch { chunk_count: usize },
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
