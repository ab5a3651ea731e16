//! Tenant Router SDK
//!
//! This crate provides the public API for the `tenant-router` module:
//!
//! - [`TenantRouterClient`] - Public API trait for consumers
//! - [`TenantRecord`], [`RoutedResponse`] - Domain models
//! - [`TenantRouterError`] - Error taxonomy shared by every transport
//!
//! ## Usage
//!
//! ```ignore
//! use tenant_router_sdk::{TenantRecord, TenantRouterClient};
//!
//! let client = module.client();
//!
//! client
//!     .create_tenant(TenantRecord::new("tenant1", "https://tenant1-service.com/resource"))
//!     .await?;
//!
//! let routed = client.route_request("tenant1").await?;
//! println!("{}", routed.data);
//! ```

pub mod api;
pub mod error;
pub mod models;

pub use api::TenantRouterClient;
pub use error::{ErrorKind, TENANT_ID_HEADER, TenantRouterError};
pub use models::{RoutedResponse, TenantRecord};
