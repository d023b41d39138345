//! # StoreClient Trait
//!
//! Provides a common interface for resource-specific stores, adding default `get_all`,
//! `get` and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ApiError, RecordId, Resource, ResourceClient};
use async_trait::async_trait;

/// Trait for domain stores to inherit the standard read and delete operations.
///
/// A store only has to say where its inner client lives; the common operations come
/// for free and stay identical across every resource.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct UnitStore {
///     inner: ResourceClient<Unit>,
/// }
///
/// impl StoreClient<Unit> for UnitStore {
///     fn inner(&self) -> &ResourceClient<Unit> {
///         &self.inner
///     }
/// }
///
/// // get_all(), get() and delete() are provided automatically:
/// let units = store.get_all().await?;
/// store.delete("42".into()).await?;
/// ```
#[async_trait]
pub trait StoreClient<T: Resource>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch every record of the resource.
    #[tracing::instrument(skip(self), fields(resource = T::NAME))]
    async fn get_all(&self) -> Result<Vec<T>, ApiError> {
        tracing::debug!("Sending request");
        self.inner().list().await
    }

    /// Fetch one record by ID.
    #[tracing::instrument(skip(self), fields(resource = T::NAME))]
    async fn get(&self, id: RecordId) -> Result<T, ApiError> {
        tracing::debug!("Sending request");
        self.inner().get(id).await
    }

    /// Delete one record by ID.
    #[tracing::instrument(skip(self), fields(resource = T::NAME))]
    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await
    }
}
