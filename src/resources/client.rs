//! Shared HTTP client for REST resources.

use crate::error::{DetailError, Result};
use crate::settings::{DEFAULT_API_BASE_URL, Settings};
use reqwest::header::HeaderValue;
use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;

/// Authentication method for HTTP requests.
#[derive(Clone)]
pub enum HttpAuth {
    /// No authentication
    None,
    /// Bearer token authentication
    Bearer(String),
    /// Basic authentication (username, password)
    Basic(String, String),
}

/// HTTP client bound to the API base URL.
///
/// Cheap to clone; every [`Resource`](super::Resource) holds one.
///
/// # Examples
///
/// ```rust,no_run
/// use entity_detail::resources::ResourceClient;
/// use std::time::Duration;
///
/// # fn example() -> entity_detail::error::Result<()> {
/// let client = ResourceClient::builder()
///     .with_base_url("https://admin.example.com/")
///     .with_auth_token("secret-token")
///     .with_timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ResourceClient {
    base_url: String,
    client: Client,
    auth: HttpAuth,
}

impl ResourceClient {
    /// Create a new builder for constructing a client.
    pub fn builder() -> ResourceClientBuilder {
        ResourceClientBuilder::new()
    }

    /// Build a client from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::builder()
            .with_base_url(&settings.api_base_url)
            .with_timeout(settings.request_timeout())
            .build()
    }

    /// The base URL paths are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a resource path against the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Start a request for `path` with authentication applied.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let request = self.client.request(method, self.url(path));

        let request = match &self.auth {
            HttpAuth::None => request,
            HttpAuth::Bearer(token) => {
                let header_value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| DetailError::Request(format!("Invalid bearer token: {}", e)))?;
                request.header("Authorization", header_value)
            }
            HttpAuth::Basic(username, password) => request.basic_auth(username, Some(password)),
        };
        Ok(request)
    }

    /// Send a request, turning non-success statuses into errors.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "resource response");
        if !status.is_success() {
            return Err(DetailError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }
        Ok(response)
    }
}

/// Builder for constructing a [`ResourceClient`].
pub struct ResourceClientBuilder {
    base_url: Option<String>,
    auth: HttpAuth,
    timeout: Duration,
    use_system_proxy: bool,
}

impl ResourceClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            auth: HttpAuth::None,
            timeout: Duration::from_secs(10),
            use_system_proxy: true,
        }
    }

    /// Set the API base URL. Defaults to `http://localhost:8080/`.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set Bearer token authentication.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth = HttpAuth::Bearer(token.into());
        self
    }

    /// Set Basic authentication.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.auth = HttpAuth::Basic(username.into(), password.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 10 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ignore `HTTP_PROXY`-style environment settings and connect directly.
    pub fn without_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<ResourceClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(DetailError::Request("Base URL must not be empty".to_string()));
        }

        let mut builder = Client::builder().timeout(self.timeout);
        if !self.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| DetailError::Request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(ResourceClient {
            base_url,
            client,
            auth: self.auth,
        })
    }
}

impl Default for ResourceClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
