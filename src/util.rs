// Small DOM helpers shared by the controllers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, Window};

use crate::error::{PageError, Result};
use crate::query::QueryPairs;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| PageError::MissingElement("window".into()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| PageError::MissingElement("document".into()))
}

/// Element by id, cast to `T`. `None` when missing or of another type.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn current_search() -> Result<String> {
    Ok(window()?.location().search()?)
}

pub fn navigate(url: &str) -> Result<()> {
    log::debug!("navigating to {}", url);
    window()?.location().set_href(url)?;
    Ok(())
}

/// String entries of a form in document order, one per checked box.
pub fn form_entries(form: &HtmlFormElement) -> Result<QueryPairs> {
    let data = web_sys::FormData::new_with_form(form)?;
    let mut entries = QueryPairs::new();
    let Some(iter) = js_sys::try_iter(data.as_ref())? else {
        return Ok(entries);
    };
    for item in iter {
        let pair = js_sys::Array::from(&item?);
        // File entries have no string value and are skipped.
        if let (Some(k), Some(v)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            entries.push((k, v));
        }
    }
    Ok(entries)
}

/// Checkbox inputs named `name` under `root`.
pub fn checkboxes(root: &Element, name: &str) -> Result<Vec<HtmlInputElement>> {
    let selector = format!("input[type=\"checkbox\"][name=\"{}\"]", name);
    let list = root.query_selector_all(&selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect())
}
