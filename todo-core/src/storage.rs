use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot encode value as JSON: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("{path} does not contain valid JSON for the expected shape: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Single-slot store persisting one serializable value as indented JSON
/// at the path bound at construction.
///
/// Writes are plain replace-on-save; there is no temp-file-then-rename
/// step and no locking, which is enough for a single-user, single-process
/// tool.
#[derive(Debug)]
pub struct Storage<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> Storage<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes `value` and writes it to the bound path, replacing any
    /// previous content.
    pub fn save(&self, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(value).map_err(StorageError::Encode)?;
        fs::write(&self.path, json).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Reads the bound path and deserializes its content.
    ///
    /// A missing file means no prior state has been saved yet and yields
    /// `T::default()`; every other failure is reported.
    pub fn load(&self) -> Result<T, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| StorageError::Decode {
            path: self.path.clone(),
            source,
        })
    }
}
