//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Configuration, PageSelectors)
//! - `controllers/` - Orchestration (Injector)
//! - `services/` - Business operations (config resolution, stylesheet, script)
//! - `infrastructure/` - External integrations (browser host, error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::injector::Injector;
pub use domain::{Configuration, PageSelectors, ReplacementType};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::host::PageHost;
pub use services::bundle::CustomizationBundle;
pub use services::config_resolver::ConfigResolver;
pub use services::script::derive_script;
pub use services::stylesheet::derive_stylesheet;
