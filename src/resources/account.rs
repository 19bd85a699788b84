//! Account endpoints: password change and registration.

use super::{Resource, ResourceClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Endpoint accepting a new password for the signed-in account.
pub const CHANGE_PASSWORD_PATH: &str = "api/account/change-password";

/// Endpoint creating a new account.
pub const REGISTER_PATH: &str = "api/register";

/// Resource proxy for `api/account/change-password`.
#[derive(Clone)]
pub struct Password {
    resource: Resource,
}

impl Password {
    /// Bind the proxy to the client's API.
    pub fn new(client: &ResourceClient) -> Self {
        Self {
            resource: Resource::new(client, CHANGE_PASSWORD_PATH),
        }
    }

    /// The underlying resource handle.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Change the signed-in account's password.
    ///
    /// The backend reads the raw request body as the new password.
    pub async fn change(&self, new_password: &str) -> Result<()> {
        self.resource.save_text(new_password).await?;
        Ok(())
    }
}

/// Account registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    /// Login name
    pub login: String,
    /// Contact email
    pub email: String,
    /// Initial password
    pub password: String,
    /// Preferred language, e.g. `en`
    pub lang_key: String,
}

/// Resource proxy for `api/register`.
#[derive(Clone)]
pub struct Register {
    resource: Resource,
}

impl Register {
    /// Bind the proxy to the client's API.
    pub fn new(client: &ResourceClient) -> Self {
        Self {
            resource: Resource::new(client, REGISTER_PATH),
        }
    }

    /// The underlying resource handle.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Register a new account.
    pub async fn register(&self, account: &ManagedUser) -> Result<()> {
        self.resource.save(account).await?;
        Ok(())
    }
}
