//! I/O failures of the file-based pipeline stages.
//!
//! Wrong sequence lengths are not errors: the cleaner warns and the splitter
//! returns `None`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Required input absent or unreadable.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output location unwritable.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generated file could not be deleted during a workspace reset.
    #[error("failed to delete {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn path(&self) -> &Path {
        match self {
            Error::Read { path, .. } | Error::Write { path, .. } | Error::Remove { path, .. } => path.as_path(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        let source = match self {
            Error::Read { source, .. } | Error::Write { source, .. } | Error::Remove { source, .. } => source,
        };
        source.kind() == io::ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, Error>;
