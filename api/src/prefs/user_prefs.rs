use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::asset::Asset;
use crate::selection::RecentSelections;
use crate::share_link::LinkExpiry;

/// Represents all user prefs.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    link_base: String,
    recent_assets: Vec<Asset>,
    default_expiry: Option<LinkExpiry>,
}

impl UserPrefs {
    /// Base URL used when none is configured.
    pub const DEFAULT_LINK_BASE: &'static str = "https://dexter.com";

    /// Creates prefs from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `TEST_TRANSFER_LINK_BASE`: base URL of generated share links.
    /// - `TEST_TRANSFER_RECENT_ASSETS`: comma-separated symbols, e.g. "usdc,eth".
    ///   Unknown symbols are skipped.
    /// - `TEST_TRANSFER_DEFAULT_EXPIRY`: "24h", "48h", "72h" or "1w".
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let link_base = lookup("TEST_TRANSFER_LINK_BASE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LINK_BASE.to_string());

        let mut recent_assets: Vec<Asset> = Vec::new();
        for asset in lookup("TEST_TRANSFER_RECENT_ASSETS")
            .unwrap_or_default()
            .split(',')
            .filter_map(|s| Asset::from_str(s.trim()).ok())
        {
            if !recent_assets.contains(&asset) {
                recent_assets.push(asset);
            }
        }

        let default_expiry = lookup("TEST_TRANSFER_DEFAULT_EXPIRY")
            .and_then(|s| LinkExpiry::from_str(s.trim()).ok());

        Self {
            link_base,
            recent_assets,
            default_expiry,
        }
    }

    pub fn link_base(&self) -> &str {
        &self.link_base
    }

    pub fn recent_assets(&self) -> &[Asset] {
        &self.recent_assets
    }

    /// The configured recent assets as a most-recently-used list.
    pub fn seeded_recent_assets(&self) -> RecentSelections<Asset> {
        RecentSelections::from_values(self.recent_assets.iter().copied())
    }

    pub fn default_expiry(&self) -> Option<LinkExpiry> {
        self.default_expiry
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
