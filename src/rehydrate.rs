//! Applies URL-derived filter state to the server-rendered controls.

use crate::error::Result;
use crate::model::{FilterState, RatingKind};
use crate::page::PageElements;
use crate::util;

const MULTI_SELECT_FIELDS: [&str; 2] = ["genre", "difficulty"];

/// Writes rating values into their hidden fields and checks exactly the
/// checkboxes listed in the URL. Glyph rows render from the same state when
/// mounted. Safe to run repeatedly.
pub fn rehydrate(state: &FilterState, page: &PageElements) -> Result<()> {
    for kind in [RatingKind::Fear, RatingKind::Players] {
        let (Some(widget), Some(value)) = (page.rating(kind), state.rating(kind)) else {
            continue;
        };
        if let Some(field) = &widget.field {
            field.set_value(&value.to_string());
        }
    }

    let Some(scope) = &page.checkbox_scope else {
        return Ok(());
    };
    for name in MULTI_SELECT_FIELDS {
        let Some(selected) = state.selections(name) else {
            continue;
        };
        for checkbox in util::checkboxes(scope, name)? {
            checkbox.set_checked(selected.contains(&checkbox.value()));
        }
    }
    Ok(())
}
