//! # Size Store
//!
//! The only store that keeps data in memory. The list fetched from `/api/sizes` is not
//! cached automatically: a consumer calls [`SizeStore::set_sizes`] with whatever it
//! wants cached, and that call is the only writer. Reads are synchronous; consumers
//! that need to react to replacements subscribe.
//!
//! ```rust,ignore
//! let sizes = ctx.sizes.get_all().await?;
//! ctx.sizes.set_sizes(sizes);
//!
//! // Later, anywhere, without awaiting:
//! let names: Vec<_> = ctx.sizes.sizes().iter().map(|s| s.name.clone()).collect();
//! ```

use crate::model::{Size, SizeCreate};
use async_trait::async_trait;
use std::sync::Arc;
use store_framework::{ApiError, Observable, ResourceClient, StoreClient};
use tokio::sync::watch;
use tracing::{debug, instrument};

/// Store for the `sizes` resource, with an in-memory list.
///
/// Clones share the same cache.
#[derive(Clone)]
pub struct SizeStore {
    inner: ResourceClient<Size>,
    cache: Arc<Observable<Vec<Size>>>,
}

impl SizeStore {
    pub fn new(inner: ResourceClient<Size>) -> Self {
        Self {
            inner,
            cache: Arc::new(Observable::default()),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_size(&self, params: SizeCreate) -> Result<Size, ApiError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    /// Replace the cached list. Never called by the store itself.
    pub fn set_sizes(&self, sizes: Vec<Size>) {
        debug!(count = sizes.len(), "Caching sizes");
        self.cache.set(sizes);
    }

    /// The cached list as last set (empty until the first `set_sizes`).
    pub fn sizes(&self) -> Vec<Size> {
        self.cache.get()
    }

    /// Notified on every `set_sizes`.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Size>> {
        self.cache.subscribe()
    }
}

#[async_trait]
impl StoreClient<Size> for SizeStore {
    fn inner(&self) -> &ResourceClient<Size> {
        &self.inner
    }
}
