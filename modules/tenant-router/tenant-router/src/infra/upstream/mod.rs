//! Outbound HTTP to tenant endpoints.

pub mod http_forwarder;
