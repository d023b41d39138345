use crate::model::{Unit, UnitCreate, UnitUpdate};
use async_trait::async_trait;
use store_framework::{ApiError, RecordId, ResourceClient, StoreClient};
use tracing::{debug, instrument};

/// Store for the `units` resource.
#[derive(Clone)]
pub struct UnitStore {
    inner: ResourceClient<Unit>,
}

impl UnitStore {
    pub fn new(inner: ResourceClient<Unit>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_unit(&self, params: UnitCreate) -> Result<Unit, ApiError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn update_unit(&self, id: RecordId, update: UnitUpdate) -> Result<Unit, ApiError> {
        debug!("Sending request");
        self.inner.update(id, update).await
    }
}

#[async_trait]
impl StoreClient<Unit> for UnitStore {
    fn inner(&self) -> &ResourceClient<Unit> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use store_framework::mock::{create_mock_transport, expect_request};
    use store_framework::Method;

    #[tokio::test]
    async fn test_delete_unit_targets_item_path() {
        let (transport, mut receiver) = create_mock_transport(10);
        let store = UnitStore::new(ResourceClient::new(transport));

        let delete_task = tokio::spawn(async move { store.delete("42".into()).await });

        let (request, responder) = expect_request(&mut receiver)
            .await
            .expect("Expected Delete request");
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.path, "/api/units/42");
        assert!(request.json().is_none());

        responder.send(Ok(Value::Null)).unwrap();
        assert!(delete_task.await.unwrap().is_ok());
    }
}
