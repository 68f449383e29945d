//! # groot
//!
//! A minimal content-addressed version control engine.
//!
//! The engine lives in [`groot_core`]; this crate re-exports it so callers can
//! depend on a single package. The `groot` binary is built from `groot-cli`.

pub use groot_core::*;
