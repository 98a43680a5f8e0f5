//! Domain layer - core data structures and types.
//!
//! - Configuration and the avatar replacement mode
//! - Selectors of the wrapped page

pub mod config;
pub mod selectors;

pub use config::{Configuration, ReplacementType};
pub use selectors::PageSelectors;
