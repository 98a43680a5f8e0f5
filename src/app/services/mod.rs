//! Services layer - configuration and customization derivation.
//!
//! - Configuration resolution with defaults
//! - Stylesheet and script derivation

pub mod bundle;
pub mod config_resolver;
pub mod script;
pub mod stylesheet;

#[cfg(test)]
pub(crate) mod test_page;
