use crate::model::{Document, DocumentCreate, DocumentUpload};
use async_trait::async_trait;
use store_framework::{ApiError, RecordId, ResourceClient, StoreClient, TransportConfig, Upload};
use tracing::{debug, instrument};

/// Store for the `documents` resource (files attached to units).
#[derive(Clone)]
pub struct DocumentStore {
    inner: ResourceClient<Document>,
}

impl DocumentStore {
    pub fn new(inner: ResourceClient<Document>) -> Self {
        Self { inner }
    }

    /// Documents of one unit: `GET /api/documents/<unit_id>`.
    #[instrument(skip(self))]
    pub async fn get_by_unit(&self, unit_id: RecordId) -> Result<Vec<Document>, ApiError> {
        debug!("Sending request");
        self.inner.list_by_parent(unit_id).await
    }

    /// Register a document hosted elsewhere: `POST /api/documents` with JSON metadata.
    #[instrument(skip(self))]
    pub async fn create_document(&self, params: DocumentCreate) -> Result<Document, ApiError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    /// Upload a file as `multipart/form-data` to `POST /api/documents`.
    ///
    /// `config` (headers, timeout, progress callback) reaches the transport untouched.
    #[instrument(
        skip(self, upload, config),
        fields(file = %upload.file_name, len = upload.bytes.len())
    )]
    pub async fn upload_document(
        &self,
        upload: DocumentUpload,
        config: TransportConfig,
    ) -> Result<Document, ApiError> {
        debug!("Sending request");
        let upload = Upload {
            file_name: upload.file_name,
            content_type: upload.content_type,
            bytes: upload.bytes,
            fields: vec![("unitId".to_string(), upload.unit_id.to_string())],
            config,
        };
        self.inner.upload(upload).await
    }
}

#[async_trait]
impl StoreClient<Document> for DocumentStore {
    fn inner(&self) -> &ResourceClient<Document> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use store_framework::mock::{create_mock_transport, expect_request, MockTransport};
    use store_framework::{Method, RequestBody};

    #[tokio::test]
    async fn test_create_document_posts_metadata_as_json() {
        let mock = Arc::new(MockTransport::new());
        mock.expect(Method::Post, "/api/documents").return_ok(json!({
            "id": 21, "unitId": 3, "name": "spec sheet", "url": "https://files.example.com/a.pdf"
        }));
        let store = DocumentStore::new(ResourceClient::new(mock.clone()));

        let document = store
            .create_document(DocumentCreate {
                unit_id: RecordId::from(3),
                name: "spec sheet".to_string(),
                url: "https://files.example.com/a.pdf".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(document.url.as_deref(), Some("https://files.example.com/a.pdf"));
        let requests = mock.requests();
        assert_eq!(requests[0].upload, None);
        assert_eq!(
            requests[0].json,
            Some(json!({
                "unitId": 3, "name": "spec sheet", "url": "https://files.example.com/a.pdf"
            }))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_upload_passes_config_through() {
        let (transport, mut receiver) = create_mock_transport(10);
        let store = DocumentStore::new(ResourceClient::new(transport));

        let upload_task = tokio::spawn(async move {
            let upload = DocumentUpload {
                unit_id: RecordId::from(3),
                file_name: "manual.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                bytes: Bytes::from_static(b"%PDF-1.7"),
            };
            let config = TransportConfig::default()
                .header("x-trace", "abc")
                .timeout(Duration::from_secs(60))
                .on_progress(|_| {});
            store.upload_document(upload, config).await
        });

        let (request, responder) = expect_request(&mut receiver)
            .await
            .expect("Expected Upload request");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/api/documents");
        match &request.body {
            RequestBody::Upload(upload) => {
                assert_eq!(upload.file_name, "manual.pdf");
                assert_eq!(upload.bytes.len(), 8);
                assert_eq!(upload.fields, vec![("unitId".to_string(), "3".to_string())]);
                assert_eq!(upload.config.headers, vec![("x-trace".to_string(), "abc".to_string())]);
                assert_eq!(upload.config.timeout, Some(Duration::from_secs(60)));
                assert!(upload.config.on_progress.is_some());
            }
            other => panic!("Expected multipart body, got {other:?}"),
        }

        responder
            .send(Ok(json!({ "id": 20, "unitId": 3, "name": "manual.pdf", "size": 8 })))
            .unwrap();
        let document = upload_task.await.unwrap().unwrap();
        assert_eq!(document.size, Some(8));
    }
}
