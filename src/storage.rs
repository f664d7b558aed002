use std::path::{Component, Path, PathBuf};

use rand::Rng;

use crate::errors::AppError;

const DOCUMENTS_DIR: &str = "documents";

/// Uploaded files on the local filesystem.
///
/// Stored references are relative to `root` (`documents/<hex>.<ext>`); that
/// string is what a document's `url` column holds.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write `bytes` under a fresh random name, keeping the upload's extension.
    pub async fn put(&self, original_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        let dir = self.root.join(DOCUMENTS_DIR);
        tokio::fs::create_dir_all(&dir).await?;

        let reference = format!("{DOCUMENTS_DIR}/{}{}", random_stem(), extension(original_name));
        tokio::fs::write(self.root.join(&reference), bytes).await?;
        Ok(reference)
    }

    /// Absolute path of a stored reference. Rejects anything that would
    /// escape the storage root.
    pub fn resolve(&self, reference: &str) -> Result<PathBuf, AppError> {
        let rel = Path::new(reference);
        if rel.components().any(|c| !matches!(c, Component::Normal(_))) {
            return Err(AppError::NotFound);
        }
        Ok(self.root.join(rel))
    }

    /// Remove a stored blob. Used to undo a write whose record never landed.
    pub async fn remove(&self, reference: &str) -> Result<(), AppError> {
        let path = self.resolve(reference)?;
        tokio::fs::remove_file(path).await?;
        Ok(())
    }
}

fn random_stem() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    hex::encode(bytes)
}

/// `.ext` of the uploaded name, lowercased and limited to alphanumerics.
fn extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= 10 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}
