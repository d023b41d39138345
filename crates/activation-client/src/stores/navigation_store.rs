use crate::model::{NavigationItem, NavigationVisibility};
use async_trait::async_trait;
use store_framework::{ApiError, RecordId, ResourceClient, StoreClient};
use tracing::{debug, instrument};

/// Store for the `navigations` resource: which menu entries are visible.
#[derive(Clone)]
pub struct NavigationStore {
    inner: ResourceClient<NavigationItem>,
}

impl NavigationStore {
    pub fn new(inner: ResourceClient<NavigationItem>) -> Self {
        Self { inner }
    }

    /// `PUT /api/navigations/<id>` with `{ "visible": .. }`.
    #[instrument(skip(self))]
    pub async fn set_visibility(
        &self,
        id: RecordId,
        visible: bool,
    ) -> Result<NavigationItem, ApiError> {
        debug!("Sending request");
        self.inner.update(id, NavigationVisibility { visible }).await
    }
}

#[async_trait]
impl StoreClient<NavigationItem> for NavigationStore {
    fn inner(&self) -> &ResourceClient<NavigationItem> {
        &self.inner
    }
}
