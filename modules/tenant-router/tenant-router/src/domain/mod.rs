pub mod directory;
pub mod error;
pub mod ports;
pub mod repo;
pub mod router;
pub mod service;

#[cfg(test)]
mod router_test;
