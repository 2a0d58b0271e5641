//! Browser-side enhancement layer for the server-rendered quest listing:
//! incremental "load more", filter/sort navigation, rating widgets and
//! rehydration of all of it from the page URL.

use log::LevelFilter;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::Document;

pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod fragment;
pub mod model;
pub mod page;
pub mod query;
pub mod rehydrate;
pub mod state;
pub mod util;

#[cfg(test)]
mod tests;

pub use config::PageConfig;
pub use error::{PageError, Result};
pub use model::FilterState;
pub use page::{PageElements, mount};

/// Entry point: logging, config, then wiring against the live document.
pub fn run() {
    console_error_panic_hook::set_once();
    let document = match util::document() {
        Ok(document) => document,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("quest board: {}", err)));
            return;
        }
    };

    let loaded = PageConfig::load(&document);
    init_logging(loaded.as_ref().map_or(LevelFilter::Info, PageConfig::level));
    let config = loaded.unwrap_or_else(|err| {
        log::warn!("ignoring page config: {}", err);
        PageConfig::default()
    });

    if let Err(err) = boot(&document, Rc::new(config)) {
        log::error!("quest board failed to start: {}", err);
    }
}

fn init_logging(level: LevelFilter) {
    let Some(level) = level.to_level() else {
        return;
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger not installed: {}", err)));
    }
}

fn boot(document: &Document, config: Rc<PageConfig>) -> Result<()> {
    let params = query::parse(&util::current_search()?).unwrap_or_else(|err| {
        log::warn!("ignoring unreadable query string: {}", err);
        Vec::new()
    });
    let page = PageElements::locate(document, &config);
    mount(&page, config, params)
}
