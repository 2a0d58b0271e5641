use log::LevelFilter;
use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

/// Id of the optional `<script type="application/json">` block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "quest-board-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Fragment endpoint for further result pages.
    pub endpoint: String,
    /// Path the filter form navigates to.
    pub navigate_path: String,
    pub load_more_id: String,
    pub results_selector: String,
    pub card_selector: String,
    pub filter_form_id: String,
    pub apply_filters_id: String,
    pub fear_root_id: String,
    pub fear_input_id: String,
    pub players_root_id: String,
    pub players_input_id: String,
    pub sort_select_id: String,
    pub labels: Labels,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/quests".into(),
            navigate_path: "/".into(),
            load_more_id: "load-more".into(),
            results_selector: ".cards-grid".into(),
            card_selector: ".card".into(),
            filter_form_id: "filter-form".into(),
            apply_filters_id: "apply-filters".into(),
            fear_root_id: "fear-level".into(),
            fear_input_id: "fear_input".into(),
            players_root_id: "players".into(),
            players_input_id: "players_input".into(),
            sort_select_id: "sort-select".into(),
            labels: Labels::default(),
            log_level: "info".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub load_more: String,
    pub loading: String,
    pub no_more: String,
    pub http_error: String,
    pub network_error: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            load_more: "Show more".into(),
            loading: "Loading...".into(),
            no_more: "No more quests".into(),
            http_error: "Failed to load".into(),
            network_error: "Error".into(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the config block from the page. Defaults when the block is absent.
    pub fn load(document: &Document) -> Result<Self> {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
