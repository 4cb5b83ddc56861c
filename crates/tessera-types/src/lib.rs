//! Core type definitions shared by the Tessera model contracts
//!
//! This crate holds the error type, the capability identifiers reported by
//! contract errors, device/dtype descriptors and the serde configuration
//! structs consumed by conforming models. It has no tensor runtime dependency
//! so that the interface crate stays backend-agnostic.

pub mod capability;
pub mod config;
pub mod devices;
pub mod errors;

pub use capability::*;
pub use config::*;
pub use devices::*;
pub use errors::*;

/// Result type used throughout Tessera
pub type Result<T> = std::result::Result<T, TesseraError>;
