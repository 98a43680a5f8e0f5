use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::domain::{Configuration, PageSelectors};
use crate::app::infrastructure::error::Result;
use crate::app::services::script::derive_script;
use crate::app::services::stylesheet::derive_stylesheet;

pub const STYLESHEET_FILE: &str = "focuschat.css";
pub const SCRIPT_FILE: &str = "focuschat.js";

/// The stylesheet and script derived from one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationBundle {
    pub stylesheet: String,
    pub script: String,
}

impl CustomizationBundle {
    pub fn derive(config: &Configuration, selectors: &PageSelectors) -> Result<Self> {
        Ok(Self {
            stylesheet: derive_stylesheet(config, selectors),
            script: derive_script(config, selectors)?,
        })
    }

    /// Write both artifacts into `dir`, creating it if needed.
    /// Returns the stylesheet and script paths.
    pub fn write_to_dir(&self, dir: &Path) -> Result<(PathBuf, PathBuf)> {
        fs::create_dir_all(dir)?;

        let css_path = dir.join(STYLESHEET_FILE);
        let js_path = dir.join(SCRIPT_FILE);
        fs::write(&css_path, &self.stylesheet)?;
        fs::write(&js_path, &self.script)?;

        info!(dir = %dir.display(), "wrote customization bundle");
        Ok((css_path, js_path))
    }
}
