use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::config::PageConfig;
use crate::error::{PageError, Result};
use crate::fragment::{PageSource, QuestPage};
use crate::query::{self, QueryPairs};
use crate::state::{Pager, PagerAction};

/// Attributes the component renders itself; server copies of these are not carried over.
pub const MANAGED_ATTRS: [&str; 5] = ["id", "class", "data-skip", "disabled", "style"];

#[derive(Properties, PartialEq, Clone)]
pub struct LoadMoreProps {
    pub initial_skip: u64,
    /// The page's results container; new cards are appended here.
    pub results: Element,
    /// Query params of the page URL, forwarded with every page request.
    pub params: QueryPairs,
    pub config: Rc<PageConfig>,
    #[prop_or_default]
    pub class: Classes,
    /// Remaining attributes of the server-rendered control (`type`, `aria-*`, ...).
    #[prop_or_default]
    pub attrs: Vec<(String, String)>,
    #[prop_or_default]
    pub source: PageSource,
}

#[function_component(LoadMore)]
pub fn load_more(props: &LoadMoreProps) -> Html {
    let initial_skip = props.initial_skip;
    let pager = use_reducer(move || Pager::new(initial_skip));
    let in_flight = use_mut_ref(|| false);
    let button_ref = use_node_ref();

    {
        let button_ref = button_ref.clone();
        use_effect_with(props.attrs.clone(), move |attrs| {
            if let Some(button) = button_ref.cast::<Element>() {
                for (name, value) in attrs {
                    if let Err(err) = button.set_attribute(name, value) {
                        log::warn!("dropping attribute {}: {}", name, PageError::from(err));
                    }
                }
            }
            || ()
        });
    }

    let onclick = {
        let pager = pager.clone();
        let props = props.clone();
        Callback::from(move |_: MouseEvent| {
            if *in_flight.borrow() || !pager.can_request() {
                return;
            }
            // Offset is captured before Begin and only moves on this request's completion.
            let skip = pager.skip;
            *in_flight.borrow_mut() = true;
            pager.dispatch(PagerAction::Begin);

            let pager = pager.clone();
            let props = props.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                let action = load_page(&props, skip).await;
                *in_flight.borrow_mut() = false;
                pager.dispatch(action);
            });
        })
    };

    let label = pager.label(&props.config.labels).to_string();
    html! {
        <button
            ref={button_ref}
            id={props.config.load_more_id.clone()}
            class={props.class.clone()}
            data-skip={pager.skip.to_string()}
            disabled={pager.disabled()}
            style={pager.hidden().then_some("display:none")}
            {onclick}
        >{ label }</button>
    }
}

async fn load_page(props: &LoadMoreProps, skip: u64) -> PagerAction {
    match append_page(props, skip).await {
        Ok(Some(added)) => {
            log::debug!("appended {} cards at skip={}", added, skip);
            PagerAction::Loaded { added }
        }
        Ok(None) => {
            log::info!("listing exhausted at skip={}", skip);
            PagerAction::NoGrid
        }
        Err(PageError::Http(status)) => {
            log::warn!("load more returned status {}", status);
            PagerAction::HttpFailed(status)
        }
        Err(err) => {
            log::error!("load more error: {}", err);
            PagerAction::NetworkFailed
        }
    }
}

/// Fetches the page at `skip` and appends its cards. `None` when the response has no grid.
async fn append_page(props: &LoadMoreProps, skip: u64) -> Result<Option<usize>> {
    let url = format!(
        "{}?{}",
        props.config.endpoint,
        query::page_query(&props.params, skip)?
    );
    let html = props.source.get(url).await?;
    let document = crate::util::document()?;
    let page = QuestPage::parse(
        &document,
        &html,
        &props.config.results_selector,
        &props.config.card_selector,
    )?;
    match page {
        QuestPage::Missing => Ok(None),
        page => Ok(Some(page.append_to(&props.results)?)),
    }
}
