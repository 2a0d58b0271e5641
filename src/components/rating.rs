use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::{RatingKind, active_glyphs};

#[derive(Properties, PartialEq, Clone)]
pub struct RatingWidgetProps {
    pub kind: RatingKind,
    pub glyphs: u32,
    /// Value taken from the URL at startup.
    #[prop_or_default]
    pub value: Option<u32>,
    /// Hidden form field mirroring the value.
    #[prop_or_default]
    pub field: Option<HtmlInputElement>,
}

#[function_component(RatingWidget)]
pub fn rating_widget(props: &RatingWidgetProps) -> Html {
    let value = use_state_eq(|| props.value);

    // Follow the prop so re-applying the same URL value is a no-op.
    {
        let value = value.clone();
        use_effect_with(props.value, move |v| {
            value.set(*v);
            || ()
        });
    }
    // Mirror into the hidden field
    {
        let field = props.field.clone();
        use_effect_with(*value, move |v| {
            if let (Some(field), Some(v)) = (field, v) {
                field.set_value(&v.to_string());
            }
            || ()
        });
    }

    let kind = props.kind;
    let glyphs = active_glyphs(props.glyphs, *value)
        .into_iter()
        .zip(1..)
        .map(|(active, ordinal): (bool, u32)| {
            let onclick = {
                let value = value.clone();
                Callback::from(move |_: MouseEvent| value.set(Some(ordinal)))
            };
            let class = classes!(kind.glyph_class(), active.then_some("active"));
            html! {
                <span key={ordinal.to_string()} {class} data-value={ordinal.to_string()} {onclick}>
                    { kind.glyph() }
                </span>
            }
        })
        .collect::<Html>();

    html! { <>{ glyphs }</> }
}
