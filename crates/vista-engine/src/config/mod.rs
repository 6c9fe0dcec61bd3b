//! Runtime configuration.
//!
//! One TOML document, every section optional:
//!
//! ```toml
//! [logging]
//! filter = "vista_engine=debug"
//! style = "auto"            # auto | always | never
//!
//! [theme]
//! storage_key = "theme-storage"
//! light_meta_color = "#ffffff"
//! dark_meta_color = "#0b1120"
//!
//! [list]
//! item_height = 70.0
//! container_height = 400.0
//! overscan = 3
//! ```

mod error;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paint::Color;
use crate::theme::{DocumentSurface, DEFAULT_STORAGE_KEY};
use crate::windowing::Viewport;

pub use error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VistaConfig {
    pub logging: LoggingSection,
    pub theme: ThemeSection,
    pub list: ListSection,
}

impl VistaConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::from_toml_str(&src)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Viewport::try_new(self.list.item_height, self.list.container_height)
            .map_err(ConfigError::List)?;
        if self.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme.storage_key must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStyle {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// `env_logger` filter directives; `RUST_LOG` is used when absent.
    pub filter: Option<String>,
    pub style: LogStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSection {
    pub storage_key: String,
    pub light_meta_color: Color,
    pub dark_meta_color: Color,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            light_meta_color: Color::rgb(0xff, 0xff, 0xff),
            dark_meta_color: Color::rgb(0x0b, 0x11, 0x20),
        }
    }
}

impl ThemeSection {
    /// A document surface painting this section's meta colours.
    pub fn document_surface(&self) -> DocumentSurface {
        DocumentSurface::new(self.light_meta_color, self.dark_meta_color)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListSection {
    pub item_height: f32,
    pub container_height: f32,
    pub overscan: usize,
}

impl Default for ListSection {
    fn default() -> Self {
        Self { item_height: 70.0, container_height: 400.0, overscan: 3 }
    }
}

impl ListSection {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.item_height, self.container_height).overscan(self.overscan)
    }
}
