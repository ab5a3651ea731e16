//! Tenant Router Module Implementation
//!
//! Routes requests to a per-tenant upstream endpoint and records per-tenant
//! request counts and latency.
//!
//! ## Architecture
//!
//! ```text
//!        HTTP client              in-process caller
//!            │                           │
//!            ▼                           ▼ module.client()
//! ┌─────────────────────┐   ┌────────────────────────┐
//! │ REST (/api/...)     │   │ TenantRouterLocalClient│
//! └─────────────────────┘   └────────────────────────┘
//!            │                           │
//!            └─────────────┬─────────────┘
//!                          ▼
//!               ┌─────────────────────┐
//!               │   Domain Service    │
//!               │  TenantDirectory    │
//!               │  RequestRouter      │
//!               └─────────────────────┘
//!                 │        │        │
//!                 ▼        ▼        ▼
//!            storage   forwarder   metrics
//! ```
//!
//! The public API is defined in `tenant-router-sdk` and re-exported here.

// === PUBLIC API (from SDK) ===
pub use tenant_router_sdk::{
    ErrorKind, RoutedResponse, TENANT_ID_HEADER, TenantRecord, TenantRouterClient,
    TenantRouterError,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::TenantRouterModule;

// === LOCAL CLIENT ===
pub mod local_client;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

pub use config::TenantRouterConfig;
