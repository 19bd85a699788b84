//! Generic REST resource handle with the default actions.

use super::ResourceClient;
use crate::entities::Entity;
use crate::error::{DetailError, Result};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;

/// Response of a write action whose body the caller may or may not need.
#[derive(Debug, Clone)]
pub struct ResourceResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl ResourceResponse {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            DetailError::Deserialization(format!("Failed to parse JSON: {}", e))
        })
    }
}

/// Request handle bound to one endpoint path.
///
/// Offers the default actions and nothing more: no caching, no retries.
///
/// | action       | request               |
/// |--------------|-----------------------|
/// | `get`        | `GET {path}/{id}`     |
/// | `query`      | `GET {path}`          |
/// | `query_with` | `GET {path}?{params}` |
/// | `save`       | `POST {path}`         |
/// | `update`     | `PUT {path}`          |
/// | `remove`     | `DELETE {path}/{id}`  |
#[derive(Clone)]
pub struct Resource {
    client: ResourceClient,
    path: String,
}

impl Resource {
    /// Bind a resource to `path`, relative to the client's base URL.
    pub fn new(client: &ResourceClient, path: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            path: path.into().trim_matches('/').to_string(),
        }
    }

    /// Bind a resource to the collection path of entity `T`.
    pub fn for_entity<T: Entity>(client: &ResourceClient) -> Self {
        Self::new(client, T::RESOURCE_PATH)
    }

    /// The bound path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The absolute URL of the bound path.
    pub fn url(&self) -> String {
        self.client.url(&self.path)
    }

    /// Fetch one record by id.
    pub async fn get<T: DeserializeOwned>(&self, id: impl Display) -> Result<T> {
        let path = format!("{}/{}", self.path, id);
        tracing::debug!(path = %path, "GET");
        let request = self.client.request(Method::GET, &path)?;
        let response = self.client.send(request).await?;
        Ok(response.json().await?)
    }

    /// Fetch the whole collection.
    pub async fn query<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        tracing::debug!(path = %self.path, "GET (query)");
        let request = self.client.request(Method::GET, &self.path)?;
        let response = self.client.send(request).await?;
        Ok(response.json().await?)
    }

    /// Fetch the collection filtered and paged by query parameters.
    ///
    /// `params` is URL-encoded into the query string, so filter criteria such
    /// as `name.contains` and paging keys (`page`, `size`, `sort`) pass
    /// straight through to the backend.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use entity_detail::prelude::*;
    ///
    /// # async fn example(client: ResourceClient) -> Result<()> {
    /// // GET api/employees?name.contains=Ad&page=0&size=20
    /// let employees: Vec<Employee> = Resource::for_entity::<Employee>(&client)
    ///     .query_with(&[("name.contains", "Ad"), ("page", "0"), ("size", "20")])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn query_with<T, P>(&self, params: &P) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        tracing::debug!(path = %self.path, "GET (query with params)");
        let request = self.client.request(Method::GET, &self.path)?.query(params);
        let response = self.client.send(request).await?;
        Ok(response.json().await?)
    }

    /// Create a record from a JSON body.
    pub async fn save<B: Serialize + ?Sized>(&self, body: &B) -> Result<ResourceResponse> {
        tracing::debug!(path = %self.path, "POST");
        let request = self.client.request(Method::POST, &self.path)?.json(body);
        self.finish(request).await
    }

    /// Replace a record from a JSON body.
    pub async fn update<B: Serialize + ?Sized>(&self, body: &B) -> Result<ResourceResponse> {
        tracing::debug!(path = %self.path, "PUT");
        let request = self.client.request(Method::PUT, &self.path)?.json(body);
        self.finish(request).await
    }

    /// Delete one record by id.
    pub async fn remove(&self, id: impl Display) -> Result<()> {
        let path = format!("{}/{}", self.path, id);
        tracing::debug!(path = %path, "DELETE");
        let request = self.client.request(Method::DELETE, &path)?;
        self.client.send(request).await?;
        Ok(())
    }

    /// POST a plain-text body.
    pub(crate) async fn save_text(&self, body: &str) -> Result<ResourceResponse> {
        tracing::debug!(path = %self.path, "POST (text)");
        let request = self
            .client
            .request(Method::POST, &self.path)?
            .header("Content-Type", "text/plain")
            .body(body.to_string());
        self.finish(request).await
    }

    async fn finish(&self, request: reqwest::RequestBuilder) -> Result<ResourceResponse> {
        let response = self.client.send(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ResourceResponse { status, body })
    }
}
