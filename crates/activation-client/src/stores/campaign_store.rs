use crate::model::{Campaign, CampaignCreate, CampaignUpdate};
use async_trait::async_trait;
use store_framework::{ApiError, RecordId, ResourceClient, StoreClient};
use tracing::{debug, instrument};

/// Store for the `campaigns` resource.
#[derive(Clone)]
pub struct CampaignStore {
    inner: ResourceClient<Campaign>,
}

impl CampaignStore {
    pub fn new(inner: ResourceClient<Campaign>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_campaign(&self, params: CampaignCreate) -> Result<Campaign, ApiError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn update_campaign(
        &self,
        id: RecordId,
        update: CampaignUpdate,
    ) -> Result<Campaign, ApiError> {
        debug!("Sending request");
        self.inner.update(id, update).await
    }
}

#[async_trait]
impl StoreClient<Campaign> for CampaignStore {
    fn inner(&self) -> &ResourceClient<Campaign> {
        &self.inner
    }
}
