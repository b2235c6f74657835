use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants;
use crate::error::{PricingError, Result};

/// Run configuration: one folder holding all three inputs and both outputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub folder: PathBuf,
    pub inputs: InputFiles,
    pub outputs: OutputFiles,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputFiles {
    pub price_update: String,
    pub product_in_direct: String,
    pub product_new_price: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    pub catalog_update: String,
    pub combined_discount: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder: PathBuf::from(constants::DEFAULT_FOLDER),
            inputs: InputFiles::default(),
            outputs: OutputFiles::default(),
        }
    }
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            price_update: constants::PRICE_UPDATE_FILE.to_string(),
            product_in_direct: constants::PRODUCT_IN_DIRECT_FILE.to_string(),
            product_new_price: constants::PRODUCT_NEW_PRICE_FILE.to_string(),
        }
    }
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            catalog_update: constants::CATALOG_UPDATE_OUTPUT_FILE.to_string(),
            combined_discount: constants::COMBINED_DISCOUNT_OUTPUT_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must be readable. Without one, `pricing.toml` in the
    /// working directory is used if it exists, otherwise all defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(constants::DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    debug!("No {} found, using defaults", constants::DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PricingError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.folder.as_os_str().is_empty() {
            return Err(PricingError::Config("folder must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Config rooted at `folder` with default file names
    pub fn with_folder<P: Into<PathBuf>>(folder: P) -> Self {
        Self {
            folder: folder.into(),
            ..Self::default()
        }
    }

    pub fn price_update_path(&self) -> PathBuf {
        self.folder.join(&self.inputs.price_update)
    }

    pub fn product_in_direct_path(&self) -> PathBuf {
        self.folder.join(&self.inputs.product_in_direct)
    }

    pub fn product_new_price_path(&self) -> PathBuf {
        self.folder.join(&self.inputs.product_new_price)
    }

    pub fn catalog_update_path(&self) -> PathBuf {
        self.folder.join(&self.outputs.catalog_update)
    }

    pub fn combined_discount_path(&self) -> PathBuf {
        self.folder.join(&self.outputs.combined_discount)
    }
}
