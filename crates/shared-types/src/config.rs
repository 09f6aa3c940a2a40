use serde::{Deserialize, Serialize};

use crate::listing::DEFAULT_PAGE_SIZE;

/// Remote list endpoints. Both are full URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EndpointConfig {
    pub classrooms: String,
    pub teachers: String,
}

/// Presentation settings shared by every table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Message rendered in place of the table and pager when the filtered
    /// collection is empty. `None` keeps the bare "Page 1 of 0" pager.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            empty_message: None,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

impl AppConfig {
    /// Parse a TOML document and normalize it.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config.normalized())
    }

    /// Page size of at least one, blank empty-state messages dropped.
    pub fn normalized(mut self) -> Self {
        self.listing.page_size = self.listing.page_size.max(1);
        if self
            .listing
            .empty_message
            .as_deref()
            .is_some_and(|m| m.trim().is_empty())
        {
            self.listing.empty_message = None;
        }
        self
    }
}
