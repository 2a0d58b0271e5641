//! Filter form and sort selector: both turn DOM state into a full navigation.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlFormElement, HtmlSelectElement};

use crate::config::PageConfig;
use crate::error::Result;
use crate::query;
use crate::util;

/// Navigation target for a set of form entries; empty values are dropped.
pub fn filter_url(navigate_path: &str, entries: &[(String, String)]) -> Result<String> {
    Ok(format!("{}?{}", navigate_path, query::form_query(entries)?))
}

/// Current location with `sort` replaced.
pub fn sort_url(pathname: &str, search: &str, sort: &str) -> Result<String> {
    let mut pairs = query::parse(search)?;
    query::set(&mut pairs, "sort", sort);
    Ok(format!("{}?{}", pathname, query::encode(&pairs)?))
}

pub fn submit_filters(form: &HtmlFormElement, config: &PageConfig) -> Result<()> {
    let entries = util::form_entries(form)?;
    util::navigate(&filter_url(&config.navigate_path, &entries)?)
}

pub fn submit_sort(select: &HtmlSelectElement) -> Result<()> {
    let location = util::window()?.location();
    let url = sort_url(&location.pathname()?, &location.search()?, &select.value())?;
    util::navigate(&url)
}

pub fn wire_apply(trigger: &Element, form: HtmlFormElement, config: Rc<PageConfig>) -> Result<()> {
    let on_click = Closure::wrap(Box::new(move |_: Event| {
        if let Err(err) = submit_filters(&form, &config) {
            log::error!("apply filters failed: {}", err);
        }
    }) as Box<dyn FnMut(Event)>);
    trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // Lives for the page; navigation tears it down.
    on_click.forget();
    Ok(())
}

pub fn wire_sort(select: HtmlSelectElement) -> Result<()> {
    let target = select.clone();
    let on_change = Closure::wrap(Box::new(move |_: Event| {
        if let Err(err) = submit_sort(&select) {
            log::error!("sort change failed: {}", err);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}
