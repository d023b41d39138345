use crate::model::{Comment, CommentCreate, CommentUpdate};
use async_trait::async_trait;
use store_framework::{ApiError, RecordId, ResourceClient, StoreClient};
use tracing::{debug, instrument};

/// Store for the `comments` resource (comments and ratings on units).
#[derive(Clone)]
pub struct CommentStore {
    inner: ResourceClient<Comment>,
}

impl CommentStore {
    pub fn new(inner: ResourceClient<Comment>) -> Self {
        Self { inner }
    }

    /// Comments of one unit: `GET /api/comments/<unit_id>`.
    #[instrument(skip(self))]
    pub async fn get_by_unit(&self, unit_id: RecordId) -> Result<Vec<Comment>, ApiError> {
        debug!("Sending request");
        self.inner.list_by_parent(unit_id).await
    }

    #[instrument(skip(self))]
    pub async fn create_comment(&self, params: CommentCreate) -> Result<Comment, ApiError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn update_comment(
        &self,
        id: RecordId,
        update: CommentUpdate,
    ) -> Result<Comment, ApiError> {
        debug!("Sending request");
        self.inner.update(id, update).await
    }
}

#[async_trait]
impl StoreClient<Comment> for CommentStore {
    fn inner(&self) -> &ResourceClient<Comment> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use store_framework::mock::MockTransport;
    use store_framework::Method;

    #[tokio::test]
    async fn test_get_by_unit_interpolates_parent_id() {
        let mock = Arc::new(MockTransport::new());
        mock.expect(Method::Get, "/api/comments/5").return_ok(json!([
            { "id": 1, "unitId": 5, "authorId": 9, "text": "Works fine", "rating": 4 }
        ]));
        let store = CommentStore::new(ResourceClient::new(mock.clone()));

        let comments = store.get_by_unit(RecordId::from(5)).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].rating, Some(4));
        mock.verify();
    }
}
