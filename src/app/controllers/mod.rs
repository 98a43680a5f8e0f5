//! Controllers layer - orchestration and coordination.
//!
//! - Page-load injection into the browser host

pub mod injector;
