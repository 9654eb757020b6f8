//! In-memory artwork cache
//!
//! Local view of the registry, replaced wholesale on every sync. A resync
//! either commits a complete fresh read of the registry or leaves the
//! previous contents untouched; partial results are never visible.

use crate::artwork::Artwork;
use crate::error::RegistryError;
use crate::gateway::RegistryClient;
use tokio::sync::RwLock;

/// Replace-only cache of the registry's current contents
///
/// After a successful sync the contents are ordered by ascending id with no
/// gaps and the length equals the count the contract reported at that
/// moment. Concurrent syncs are last-writer-wins; there is no merge.
#[derive(Default)]
pub struct ArtworkStore {
    artworks: RwLock<Vec<Artwork>>,
}

impl ArtworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the current contents
    pub async fn snapshot(&self) -> Vec<Artwork> {
        self.artworks.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.artworks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.artworks.read().await.is_empty()
    }

    /// Replace the contents wholesale
    pub async fn replace(&self, artworks: Vec<Artwork>) {
        *self.artworks.write().await = artworks;
    }

    /// Full re-read of the registry into the cache
    ///
    /// Reads the count, then every artwork by index sequentially. Only after
    /// all reads succeed are the contents replaced; any read failure abandons
    /// the resync and keeps the previous contents. O(n) with no pagination,
    /// acceptable while the registry stays small.
    pub async fn sync(&self, client: &dyn RegistryClient) -> Result<usize, RegistryError> {
        let count = client.count().await?;
        let mut fresh = Vec::with_capacity(count as usize);
        for index in 0..count {
            fresh.push(client.artwork_at(index).await?);
        }
        let total = fresh.len();
        self.replace(fresh).await;
        log::debug!("Store synced: {total} artworks");
        Ok(total)
    }
}
