use crate::model::{Staff, StaffCreate, StaffUpdate};
use async_trait::async_trait;
use store_framework::{ApiError, RecordId, ResourceClient, StoreClient};
use tracing::{debug, instrument};

/// Store for the `staffs` resource.
#[derive(Clone)]
pub struct StaffStore {
    inner: ResourceClient<Staff>,
}

impl StaffStore {
    pub fn new(inner: ResourceClient<Staff>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_staff(&self, params: StaffCreate) -> Result<Staff, ApiError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn update_staff(&self, id: RecordId, update: StaffUpdate) -> Result<Staff, ApiError> {
        debug!("Sending request");
        self.inner.update(id, update).await
    }
}

#[async_trait]
impl StoreClient<Staff> for StaffStore {
    fn inner(&self) -> &ResourceClient<Staff> {
        &self.inner
    }
}
