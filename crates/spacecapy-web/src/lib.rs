//! spacecapy web library entry.
//!
//! Wires config, storage backends, metrics, and the HTTP handlers into the
//! service. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod page;
pub mod router;
pub mod services;
pub mod store;
