//! Composition root: locates the page's elements and wires every controller.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
};

use crate::components::{LoadMore, LoadMoreProps, RatingWidget, RatingWidgetProps, load_more};
use crate::config::PageConfig;
use crate::error::Result;
use crate::filters;
use crate::model::{DEFAULT_GLYPHS, FilterState, RatingKind};
use crate::query::{self, QueryPairs};
use crate::rehydrate::rehydrate;
use crate::util::{self, by_id};

#[derive(Clone, Debug)]
pub struct RatingElements {
    pub root: Element,
    pub field: Option<HtmlInputElement>,
}

/// Element references the controllers work on. Any of them may be absent.
#[derive(Clone, Debug, Default)]
pub struct PageElements {
    pub load_more: Option<HtmlElement>,
    pub results: Option<Element>,
    pub filter_form: Option<HtmlFormElement>,
    pub apply_filters: Option<Element>,
    pub fear: Option<RatingElements>,
    pub players: Option<RatingElements>,
    pub sort_select: Option<HtmlSelectElement>,
    /// Where genre/difficulty checkboxes are looked up.
    pub checkbox_scope: Option<Element>,
}

impl PageElements {
    pub fn locate(document: &Document, config: &PageConfig) -> Self {
        let rating = |root_id: &str, input_id: &str| {
            document.get_element_by_id(root_id).map(|root| RatingElements {
                root,
                field: by_id(document, input_id),
            })
        };
        let filter_form: Option<HtmlFormElement> = by_id(document, &config.filter_form_id);
        let checkbox_scope = filter_form
            .clone()
            .map(Element::from)
            .or_else(|| document.document_element());
        Self {
            load_more: by_id(document, &config.load_more_id),
            results: document.query_selector(&config.results_selector).ok().flatten(),
            filter_form,
            apply_filters: document.get_element_by_id(&config.apply_filters_id),
            fear: rating(&config.fear_root_id, &config.fear_input_id),
            players: rating(&config.players_root_id, &config.players_input_id),
            sort_select: by_id(document, &config.sort_select_id),
            checkbox_scope,
        }
    }

    pub fn rating(&self, kind: RatingKind) -> Option<&RatingElements> {
        match kind {
            RatingKind::Fear => self.fear.as_ref(),
            RatingKind::Players => self.players.as_ref(),
        }
    }
}

/// Wires all controllers, then rehydrates once from `params`.
pub fn mount(page: &PageElements, config: Rc<PageConfig>, params: QueryPairs) -> Result<()> {
    let state = FilterState::from_query(&params);

    match (&page.load_more, &page.results) {
        (Some(button), Some(results)) => {
            mount_load_more(button, results.clone(), params.clone(), config.clone())?
        }
        (Some(button), None) => {
            log::debug!("no results grid; load more disabled");
            button.set_attribute("disabled", "")?;
            button.set_text_content(Some(&config.labels.no_more));
        }
        (None, _) => log::debug!("no load more control"),
    }

    match (&page.apply_filters, &page.filter_form) {
        (Some(trigger), Some(form)) => {
            filters::wire_apply(trigger, form.clone(), config.clone())?
        }
        _ => log::debug!("filter form not wired"),
    }

    if let Some(select) = &page.sort_select {
        filters::wire_sort(select.clone())?;
    }

    for kind in [RatingKind::Fear, RatingKind::Players] {
        if let Some(widget) = page.rating(kind) {
            mount_rating(kind, widget, state.rating(kind))?;
        }
    }

    rehydrate(&state, page)?;
    log::debug!("rehydrated filters: {}", query::encode(&state.to_query())?);
    Ok(())
}

/// Swaps the server-rendered control for the component, keeping its offset,
/// label and attributes.
fn mount_load_more(
    button: &HtmlElement,
    results: Element,
    params: QueryPairs,
    config: Rc<PageConfig>,
) -> Result<()> {
    let initial_skip = button
        .get_attribute("data-skip")
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0);
    let config = match button.text_content().map(|t| t.trim().to_string()) {
        Some(label) if !label.is_empty() && label != config.labels.load_more => {
            let mut config = (*config).clone();
            config.labels.load_more = label;
            Rc::new(config)
        }
        _ => config,
    };
    let attrs = server_attrs(button);

    let host = util::document()?.create_element("span")?;
    host.set_attribute("style", "display:contents")?;
    button.replace_with_with_node_1(&host)?;

    let props = LoadMoreProps {
        initial_skip,
        results,
        params,
        config,
        class: button.class_name().into(),
        attrs,
        source: Default::default(),
    };
    yew::Renderer::<LoadMore>::with_root_and_props(host, props).render();
    Ok(())
}

/// Attributes of `el` the load-more component does not render itself.
pub fn server_attrs(el: &Element) -> Vec<(String, String)> {
    el.get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter(|name| !load_more::MANAGED_ATTRS.contains(&name.as_str()))
        .filter_map(|name| el.get_attribute(&name).map(|value| (name, value)))
        .collect()
}

/// Replaces the server glyphs with the component, in place. Other children of
/// the root (hidden input, labels) stay where they are.
fn mount_rating(kind: RatingKind, widget: &RatingElements, value: Option<u32>) -> Result<()> {
    let glyphs = glyph_count(&widget.root);
    let host = util::document()?.create_element("span")?;
    host.set_attribute("style", "display:contents")?;

    let existing = widget.root.query_selector_all("[data-value]")?;
    match existing.item(0) {
        Some(first) => match first.parent_node() {
            Some(parent) => {
                parent.insert_before(&host, Some(&first))?;
            }
            None => {
                widget.root.append_child(&host)?;
            }
        },
        None => {
            widget.root.append_child(&host)?;
        }
    }
    for node in (0..existing.length()).filter_map(|i| existing.item(i)) {
        if let Some(glyph) = node.dyn_ref::<Element>() {
            glyph.remove();
        }
    }

    let props = RatingWidgetProps {
        kind,
        glyphs,
        value,
        field: widget.field.clone(),
    };
    yew::Renderer::<RatingWidget>::with_root_and_props(host, props).render();
    Ok(())
}

/// Glyph count from the server markup: highest `data-value`, else child count.
pub fn glyph_count(root: &Element) -> u32 {
    let Ok(list) = root.query_selector_all("[data-value]") else {
        return DEFAULT_GLYPHS;
    };
    let highest = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| {
            node.dyn_ref::<Element>()
                .and_then(|el| el.get_attribute("data-value"))
        })
        .filter_map(|raw| raw.trim().parse::<u32>().ok())
        .max();
    match highest {
        Some(n) if n > 0 => n,
        _ if list.length() > 0 => list.length(),
        _ => DEFAULT_GLYPHS,
    }
}
