//! Top-level facade crate for spacecapy.
//!
//! Re-exports core types and the web library so users can depend on a single crate.

pub mod core {
    pub use spacecapy_core::*;
}

pub mod web {
    pub use spacecapy_web::*;
}
