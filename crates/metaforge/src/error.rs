//! Error types for metaforge operations.
//!
//! Parsing is tolerant and never fails, so the error surface is small:
//! I/O failures and the missing-input condition. The missing-input
//! message is the localized message the original deployment scripts
//! expect to see.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for metaforge operations.
#[derive(Debug, Error)]
pub enum MetaforgeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("错误：找不到文件 {}", .0.display())]
    MissingInput(PathBuf),
}
