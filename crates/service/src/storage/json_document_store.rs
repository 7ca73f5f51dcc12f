use std::{path::PathBuf, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Ordered collection of JSON documents persisted to a single file.
///
/// Documents keep insertion order. Every write is applied to a copy, flushed
/// to disk (temp file + rename), and only then made visible, so a failed
/// flush leaves the in-memory view untouched. Writers are serialized by the
/// lock; readers see the last committed state.
pub struct JsonDocumentStore<T> {
    inner: RwLock<Vec<T>>,
    file_path: PathBuf,
}

impl<T> JsonDocumentStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Open the store at `path`, creating an empty collection if the file is missing.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let docs: Vec<T> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Db(format!("corrupt document file {}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: Vec<T> = Vec::new();
                fs::write(&file_path, serde_json::to_vec(&empty)?).await?;
                empty
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Arc::new(Self { inner: RwLock::new(docs), file_path }))
    }

    async fn persist(&self, docs: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(docs)?;
        let tmp = self.file_path.with_extension("json.tmp");
        fs::write(&tmp, data).await?;
        fs::rename(&tmp, &self.file_path).await?;
        Ok(())
    }

    /// All documents in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.clone()
    }

    /// Append a document and persist.
    pub async fn insert(&self, doc: T) -> Result<(), ServiceError> {
        let mut docs = self.inner.write().await;
        let mut next = docs.clone();
        next.push(doc);
        self.persist(&next).await?;
        *docs = next;
        Ok(())
    }

    /// Mutate the first document matching `pred`; returns it after the change.
    pub async fn update_first<P, F>(&self, pred: P, f: F) -> Result<Option<T>, ServiceError>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&mut T),
    {
        let mut docs = self.inner.write().await;
        let Some(pos) = docs.iter().position(|d| pred(d)) else {
            return Ok(None);
        };
        let mut next = docs.clone();
        f(&mut next[pos]);
        let updated = next[pos].clone();
        self.persist(&next).await?;
        *docs = next;
        Ok(Some(updated))
    }

    /// Remove the first document matching `pred`; returns it as it was.
    pub async fn remove_first<P>(&self, pred: P) -> Result<Option<T>, ServiceError>
    where
        P: Fn(&T) -> bool,
    {
        let mut docs = self.inner.write().await;
        let Some(pos) = docs.iter().position(|d| pred(d)) else {
            return Ok(None);
        };
        let mut next = docs.clone();
        let removed = next.remove(pos);
        self.persist(&next).await?;
        *docs = next;
        Ok(Some(removed))
    }
}
