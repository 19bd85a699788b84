//! REST resource proxies.
//!
//! Each proxy is bound to one fixed endpoint and issues single-shot requests
//! through a shared [`ResourceClient`].

mod account;
mod client;
mod resource;

pub use account::{CHANGE_PASSWORD_PATH, ManagedUser, Password, REGISTER_PATH, Register};
pub use client::{HttpAuth, ResourceClient, ResourceClientBuilder};
pub use resource::{Resource, ResourceResponse};
