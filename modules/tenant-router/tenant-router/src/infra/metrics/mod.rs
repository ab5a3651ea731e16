//! Per-tenant request metrics.

pub mod prometheus_recorder;
