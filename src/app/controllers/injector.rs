use tracing::{debug, warn};

use crate::app::domain::{Configuration, PageSelectors};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::host::PageHost;
use crate::app::services::bundle::CustomizationBundle;

/// Applies the customizations to each page the host finishes loading.
///
/// The bundle is derived once from the configuration; the host calls
/// [`Injector::on_page_load`] after every load completion.
pub struct Injector {
    bundle: CustomizationBundle,
    notifications_enabled: bool,
    injections: u64,
}

impl Injector {
    pub fn new(config: &Configuration) -> Result<Self> {
        Self::with_selectors(config, &PageSelectors::default())
    }

    pub fn with_selectors(config: &Configuration, selectors: &PageSelectors) -> Result<Self> {
        Ok(Self {
            bundle: CustomizationBundle::derive(config, selectors)?,
            notifications_enabled: config.enable_notifications,
            injections: 0,
        })
    }

    pub fn bundle(&self) -> &CustomizationBundle {
        &self.bundle
    }

    /// Whether the host should expose its notification bridge to the page
    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    /// Number of page loads customized so far
    pub fn injections(&self) -> u64 {
        self.injections
    }

    /// Inject the stylesheet, then the script, into the loaded document.
    ///
    /// The script is skipped when the stylesheet could not be inserted.
    pub fn on_page_load(&mut self, host: &dyn PageHost) -> Result<()> {
        if let Err(e) = host.insert_css(&self.bundle.stylesheet) {
            warn!("stylesheet injection failed: {e}");
            return Err(e);
        }
        if let Err(e) = host.evaluate_script(&self.bundle.script) {
            warn!("script injection failed: {e}");
            return Err(e);
        }

        self.injections += 1;
        debug!(count = self.injections, "customizations injected");
        Ok(())
    }
}
