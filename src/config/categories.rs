//! Category display-order configuration.
//!
//! The registration site presents the catalog as two pages: the language
//! class page and the enrichment program page. Each page shows a fixed list
//! of category codes in a fixed priority order. The orders ship with
//! compiled-in defaults matching the school's current pages and can be
//! overridden from config.toml.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default category order for the language class page.
pub const LANGUAGE_PAGE: &[&str] = &[
    "LC", "CSL", "AC", "SP-FULL", "SP-HALF", "SP-EC", "BOOK", "SP-lang", "SP-AC",
];

/// Default category order for the enrichment program page.
pub const ENRICHMENT_PAGE: &[&str] = &["EP", "EP-AM", "SP-EP"];

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Category orders for each catalog page
    pub pages: Pages,
}

/// Category orders for the two catalog pages
#[derive(Debug, Deserialize, Clone)]
pub struct Pages {
    /// Category codes shown on the language class page, in display order
    pub language: Vec<String>,
    /// Category codes shown on the enrichment program page, in display order
    pub enrichment: Vec<String>,
}

impl Default for Pages {
    fn default() -> Self {
        Self {
            language: LANGUAGE_PAGE.iter().map(ToString::to_string).collect(),
            enrichment: ENRICHMENT_PAGE.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Loads category page configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads category page configuration from the default location
/// (./config.toml), falling back to the compiled-in page orders when the
/// file is absent.
pub fn load_default_pages() -> Result<Pages> {
    if Path::new("config.toml").exists() {
        Ok(load_config("config.toml")?.pages)
    } else {
        Ok(Pages::default())
    }
}
