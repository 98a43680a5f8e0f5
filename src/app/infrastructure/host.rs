//! Seam to the browser host that owns the window and the webview.

use super::error::Result;

/// Injection capabilities a browser host exposes for the currently loaded document.
///
/// Implemented by the shell around its webview (e.g. `insertCSS` /
/// `executeJavaScript`, or wry's `evaluate_script`).
pub trait PageHost {
    /// Add a stylesheet to the loaded document.
    fn insert_css(&self, css: &str) -> Result<()>;

    /// Run a script in the loaded document.
    fn evaluate_script(&self, script: &str) -> Result<()>;
}
