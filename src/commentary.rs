//! Commentary Reader
//! Looks up the free-text price-trend commentary stored per (year, month).

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Shown by the shell when no commentary exists for the selected point in
/// time. Substituted, never raised.
pub const NOT_FOUND_MESSAGE: &str = "해당 시점의 정보를 찾을 수 없습니다.";

#[derive(Error, Debug)]
pub enum CommentaryError {
    #[error("failed to read commentary {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Commentary lookup result. A missing file is an expected outcome, so it
/// lives on the Ok path; the shell decides how to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Commentary {
    Found(String),
    NotFound,
}

impl Commentary {
    pub fn is_found(&self) -> bool {
        matches!(self, Commentary::Found(_))
    }

    /// The display text: the commentary itself, or the fixed
    /// [`NOT_FOUND_MESSAGE`] placeholder.
    pub fn into_text(self) -> String {
        match self {
            Commentary::Found(text) => text,
            Commentary::NotFound => NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

/// Reads commentary files named
/// `"<year>년 <month>월 소비자 물가 동향.txt"` under one directory.
pub struct CommentaryReader {
    root: PathBuf,
}

impl CommentaryReader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the commentary resource for a point in time.
    pub fn resource_path(&self, year: i32, month: u32) -> PathBuf {
        self.root
            .join(format!("{year}년 {month}월 소비자 물가 동향.txt"))
    }

    /// Read the commentary for `(year, month)` as UTF-8.
    ///
    /// Only a missing file maps to [`Commentary::NotFound`]; every other
    /// failure (permissions, non-UTF-8 content) propagates.
    pub fn read(&self, year: i32, month: u32) -> Result<Commentary, CommentaryError> {
        let path = self.resource_path(year, month);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Commentary::Found(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(year, month, path = %path.display(), "no commentary for this period");
                Ok(Commentary::NotFound)
            }
            Err(source) => Err(CommentaryError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}
