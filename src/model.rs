//! Core data model for the quest listing page.
//! `FilterState` is the explicit record between the URL and the DOM.

use std::collections::BTreeSet;

use crate::query::{self, QueryPairs};

/// Page size the listing endpoint serves. Shared with the server, not tunable here.
pub const PAGE_SIZE: usize = 15;

/// Glyph count used when the server rendered an empty widget root.
pub const DEFAULT_GLYPHS: u32 = 5;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub skip: u64,
    pub fear_level: Option<u32>,
    pub players: Option<u32>,
    pub genres: BTreeSet<String>,
    pub difficulties: BTreeSet<String>,
    pub sort: Option<String>,
    /// Free-text search box.
    pub q: Option<String>,
}

impl FilterState {
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let text = |key: &str| {
            query::get_all(pairs, key)
                .find(|v| !v.is_empty())
                .map(str::to_string)
        };
        let set = |key: &str| {
            query::get_all(pairs, key)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect::<BTreeSet<_>>()
        };
        Self {
            skip: query::get(pairs, "skip")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0),
            fear_level: query::get(pairs, "fear_level").and_then(parse_rating),
            players: query::get(pairs, "players").and_then(parse_rating),
            genres: set("genre"),
            difficulties: set("difficulty"),
            sort: text("sort"),
            q: text("q"),
        }
    }

    pub fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(q) = &self.q {
            pairs.push(("q".into(), q.clone()));
        }
        pairs.extend(self.genres.iter().map(|g| ("genre".into(), g.clone())));
        pairs.extend(
            self.difficulties
                .iter()
                .map(|d| ("difficulty".into(), d.clone())),
        );
        if let Some(v) = self.fear_level {
            pairs.push(("fear_level".into(), v.to_string()));
        }
        if let Some(v) = self.players {
            pairs.push(("players".into(), v.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort".into(), sort.clone()));
        }
        if self.skip > 0 {
            pairs.push(("skip".into(), self.skip.to_string()));
        }
        pairs
    }

    pub fn rating(&self, kind: RatingKind) -> Option<u32> {
        match kind {
            RatingKind::Fear => self.fear_level,
            RatingKind::Players => self.players,
        }
    }

    /// Checkbox values for a multi-select field name, if it is one.
    pub fn selections(&self, field: &str) -> Option<&BTreeSet<String>> {
        match field {
            "genre" => Some(&self.genres),
            "difficulty" => Some(&self.difficulties),
            _ => None,
        }
    }
}

/// Ratings are parsed numerically on every path (click and URL).
pub fn parse_rating(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingKind {
    Fear,
    Players,
}

impl RatingKind {
    pub fn glyph(self) -> &'static str {
        match self {
            RatingKind::Fear => "★",
            RatingKind::Players => "●",
        }
    }

    pub fn glyph_class(self) -> &'static str {
        match self {
            RatingKind::Fear => "star",
            RatingKind::Players => "circle",
        }
    }
}

/// Zero-based glyph `index` is active iff `index < value`.
pub fn glyph_active(index: u32, value: Option<u32>) -> bool {
    value.is_some_and(|v| index < v)
}

pub fn active_glyphs(count: u32, value: Option<u32>) -> Vec<bool> {
    (0..count).map(|i| glyph_active(i, value)).collect()
}
