use crate::model::{Warehouse, WarehouseCreate, WarehouseUpdate};
use async_trait::async_trait;
use store_framework::{ApiError, RecordId, ResourceClient, StoreClient};
use tracing::{debug, instrument};

/// Store for the `warehouses` resource.
#[derive(Clone)]
pub struct WarehouseStore {
    inner: ResourceClient<Warehouse>,
}

impl WarehouseStore {
    pub fn new(inner: ResourceClient<Warehouse>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_warehouse(&self, params: WarehouseCreate) -> Result<Warehouse, ApiError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn update_warehouse(
        &self,
        id: RecordId,
        update: WarehouseUpdate,
    ) -> Result<Warehouse, ApiError> {
        debug!("Sending request");
        self.inner.update(id, update).await
    }
}

#[async_trait]
impl StoreClient<Warehouse> for WarehouseStore {
    fn inner(&self) -> &ResourceClient<Warehouse> {
        &self.inner
    }
}
