//! FocusChat - distraction-free customizations for WhatsApp Web.
//!
//! A configuration is resolved once, turned into a stylesheet and a script,
//! and handed to the browser host on every page load.

pub mod app;
