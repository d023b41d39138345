use crate::model::{Stock, StockCreate, StockMovement, StockUpdate};
use async_trait::async_trait;
use serde_json::Value;
use store_framework::{ApiError, RecordId, ResourceClient, StoreClient};
use tracing::{debug, instrument};

/// Sub-path movements are posted to: `/api/stocks/movement`.
pub const MOVEMENT_SEGMENT: &str = "movement";

/// Store for the `stocks` resource.
#[derive(Clone)]
pub struct StockStore {
    inner: ResourceClient<Stock>,
}

impl StockStore {
    pub fn new(inner: ResourceClient<Stock>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_stock(&self, params: StockCreate) -> Result<Stock, ApiError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn update_stock(&self, id: RecordId, update: StockUpdate) -> Result<Stock, ApiError> {
        debug!("Sending request");
        self.inner.update(id, update).await
    }

    /// Record a stock movement.
    ///
    /// Movements are their own records on the server; this is not an update of the
    /// stock entry, and the API's reply is returned as-is.
    #[instrument(skip(self))]
    pub async fn record_movement(&self, movement: StockMovement) -> Result<Value, ApiError> {
        debug!("Sending request");
        self.inner.post_to(MOVEMENT_SEGMENT, &movement).await
    }
}

#[async_trait]
impl StoreClient<Stock> for StockStore {
    fn inner(&self) -> &ResourceClient<Stock> {
        &self.inner
    }
}
