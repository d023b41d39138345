//! # Generic Client
//!
//! This module defines the generic client for talking to one resource endpoint.

use crate::error::ApiError;
use crate::request::{ApiRequest, Method, Upload};
use crate::resource::{RecordId, Resource};
use crate::transport::Transport;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type-safe, async API for one REST resource. Every
/// method builds exactly one [`ApiRequest`] against `/api/<T::NAME>[/<id>]`, hands it to
/// the shared [`Transport`] and decodes the reply into the expected type.
///
/// * **Cloneable** – holds only an `Arc` to the transport, so cloning is inexpensive.
/// * **Pass-through** – payloads are serialized as given; errors come back unchanged.
/// * **Independent calls** – nothing is queued or merged; concurrent calls race.
pub struct ResourceClient<T: Resource> {
    transport: Arc<dyn Transport>,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    /// `/api/<resource>`
    pub fn base_path() -> String {
        format!("/api/{}", T::NAME)
    }

    /// `/api/<resource>/<segment>`, with the segment interpolated verbatim.
    pub fn item_path(segment: impl Display) -> String {
        format!("{}/{}", Self::base_path(), segment)
    }

    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        self.send(ApiRequest::new(Method::Get, Self::base_path())).await
    }

    /// Records belonging to a parent, e.g. the comments of one unit.
    pub async fn list_by_parent(&self, parent_id: RecordId) -> Result<Vec<T>, ApiError> {
        self.send(ApiRequest::new(Method::Get, Self::item_path(parent_id)))
            .await
    }

    pub async fn get(&self, id: RecordId) -> Result<T, ApiError> {
        self.send(ApiRequest::new(Method::Get, Self::item_path(id))).await
    }

    pub async fn create(&self, params: T::Create) -> Result<T, ApiError> {
        let body = encode(&params)?;
        self.send(ApiRequest::new(Method::Post, Self::base_path()).with_json(body))
            .await
    }

    pub async fn update(&self, id: RecordId, update: T::Update) -> Result<T, ApiError> {
        let body = encode(&update)?;
        self.send(ApiRequest::new(Method::Put, Self::item_path(id)).with_json(body))
            .await
    }

    /// Deletes a record. Whatever the API answers with is discarded.
    pub async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        self.transport
            .send(ApiRequest::new(Method::Delete, Self::item_path(id)))
            .await
            .map(|_| ())
    }

    /// POST to a named sub-path of the resource, for operations that are not plain CRUD.
    pub async fn post_to<P, R>(&self, segment: &str, payload: &P) -> Result<R, ApiError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(payload)?;
        self.send(ApiRequest::new(Method::Post, Self::item_path(segment)).with_json(body))
            .await
    }

    /// POST a multipart upload to the resource's base path.
    pub async fn upload(&self, upload: Upload) -> Result<T, ApiError> {
        self.send(ApiRequest::new(Method::Post, Self::base_path()).with_upload(upload))
            .await
    }

    async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let value = self.transport.send(request).await?;
        Ok(serde_json::from_value(value)?)
    }
}

fn encode<P: Serialize + ?Sized>(payload: &P) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(ApiError::Encode)
}
