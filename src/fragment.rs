//! Typed view of the listing endpoint's HTML fragment.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlTemplateElement, Node, Response};

use crate::error::{PageError, Result};

#[derive(Debug)]
pub enum QuestPage {
    /// No results grid in the response; the listing is exhausted.
    Missing,
    Cards {
        /// Child nodes of the fragment's grid, in server order.
        nodes: Vec<Node>,
        count: usize,
    },
}

impl QuestPage {
    /// Parses `html` inertly and extracts the results grid.
    pub fn parse(
        document: &Document,
        html: &str,
        grid_selector: &str,
        card_selector: &str,
    ) -> Result<Self> {
        let template = document
            .create_element("template")?
            .dyn_into::<HtmlTemplateElement>()
            .map_err(|_| PageError::Js("template element unsupported".into()))?;
        template.set_inner_html(html);
        let content = template.content();
        let Some(grid) = content.query_selector(grid_selector)? else {
            return Ok(QuestPage::Missing);
        };
        let count = grid.query_selector_all(card_selector)?.length() as usize;
        let children = grid.child_nodes();
        let nodes = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();
        Ok(QuestPage::Cards { nodes, count })
    }

    /// Moves the cards to the end of `target`; returns how many were added.
    pub fn append_to(self, target: &Element) -> Result<usize> {
        match self {
            QuestPage::Missing => Ok(0),
            QuestPage::Cards { nodes, count } => {
                for node in &nodes {
                    target.append_child(node)?;
                }
                Ok(count)
            }
        }
    }
}

type PageFuture = Pin<Box<dyn Future<Output = Result<String>>>>;

/// Where listing pages come from: request URL in, HTML body out.
#[derive(Clone)]
pub struct PageSource(Rc<dyn Fn(String) -> PageFuture>);

impl PageSource {
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = Result<String>> + 'static,
    {
        Self(Rc::new(move |url| Box::pin(fetch(url))))
    }

    /// The browser's `fetch`.
    pub fn http() -> Self {
        Self::new(|url: String| async move { fetch_html(&url).await })
    }

    pub async fn get(&self, url: String) -> Result<String> {
        (self.0)(url).await
    }
}

impl Default for PageSource {
    fn default() -> Self {
        Self::http()
    }
}

impl PartialEq for PageSource {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Fetches one page of the listing as HTML text.
pub async fn fetch_html(url: &str) -> Result<String> {
    let window = crate::util::window()?;
    let response: Response = JsFuture::from(window.fetch_with_str(url)).await?.dyn_into()?;
    if !response.ok() {
        return Err(PageError::Http(response.status()));
    }
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| PageError::Js("response body is not text".into()))
}
