//! Application configuration.

use serde::Deserialize;

/// Application configuration loaded from TOML file.
///
/// Every field has a default matching the original generator, so an
/// absent or empty configuration file reproduces its exact output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Business-domain code resolved in `datamodel_business_domain`
    pub domain_code: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            domain_code: "TOLL_COLLECTION".to_string(),
        }
    }
}
