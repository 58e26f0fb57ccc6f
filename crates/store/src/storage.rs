//! Durable slot storage.
//!
//! Each collection persists to its own named slot, laid out as a directory
//! of JSON files, one per slot. Writes serialize the entire collection - no
//! batching, no partial updates.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage slot keys.
///
/// Key names are part of the on-disk contract, including the `isAdmin`
/// casing; existing data directories depend on them.
pub mod slots {
    /// Product catalog.
    pub const PRODUCTS: &str = "products";

    /// Order history.
    pub const ORDERS: &str = "orders";

    /// Shopping cart contents.
    pub const CART: &str = "cart";

    /// Customer inquiries.
    pub const INQUIRIES: &str = "inquiries";

    /// Admin session flag; holds the literal string `"true"` while a
    /// session is active and is absent otherwise.
    pub const IS_ADMIN: &str = "isAdmin";
}

/// Errors raised by slot storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem read/write failed.
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),

    /// A slot's contents could not be (de)serialized.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A directory of JSON slot files.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Open storage rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Load a slot's value, or `None` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot file exists but cannot be read or
    /// parsed.
    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<T>, StorageError> {
        let path = self.slot_path(slot);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Serialize `value` and write it to the slot, replacing any previous
    /// contents.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the write fails.
    pub fn save<T: Serialize + ?Sized>(&self, slot: &str, value: &T) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(value)?;
        fs::write(self.slot_path(slot), contents)?;
        Ok(())
    }

    /// Remove a slot. Removing an absent slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` for filesystem failures other than the
    /// slot being absent.
    pub fn remove(&self, slot: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Root directory of this storage.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{slot}.json"))
    }
}
