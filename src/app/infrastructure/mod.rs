//! Infrastructure layer - external integrations and utilities.
//!
//! - Browser host seam
//! - Error types

pub mod error;
pub mod host;
