use std::collections::BTreeSet;
use std::rc::Rc;

use yew::Reducible;

use crate::config::{Labels, PageConfig};
use crate::model::{FilterState, PAGE_SIZE, RatingKind, active_glyphs, glyph_active, parse_rating};
use crate::query;
use crate::state::{Failure, Pager, PagerAction, PagerPhase};

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn step(pager: Pager, action: PagerAction) -> Pager {
    (*Rc::new(pager).reduce(action)).clone()
}

fn load(pager: Pager, added: usize) -> Pager {
    step(step(pager, PagerAction::Begin), PagerAction::Loaded { added })
}

#[test]
fn parse_keeps_repeated_keys_in_order() {
    let parsed = query::parse("?genre=horror&sort=rating&genre=mystery").unwrap();
    assert_eq!(
        parsed,
        pairs(&[("genre", "horror"), ("sort", "rating"), ("genre", "mystery")])
    );
    assert!(query::parse("").unwrap().is_empty());
    assert!(query::parse("?").unwrap().is_empty());
}

#[test]
fn parse_decodes_form_encoding() {
    let parsed = query::parse("q=haunted+house&genre=sci%2Ffi").unwrap();
    assert_eq!(query::get(&parsed, "q"), Some("haunted house"));
    assert_eq!(query::get(&parsed, "genre"), Some("sci/fi"));
}

#[test]
fn set_replaces_first_and_drops_duplicates() {
    let mut p = pairs(&[("skip", "0"), ("sort", "rating"), ("skip", "30")]);
    query::set(&mut p, "skip", "15");
    assert_eq!(p, pairs(&[("skip", "15"), ("sort", "rating")]));

    let mut p = pairs(&[("sort", "rating")]);
    query::set(&mut p, "skip", "15");
    assert_eq!(p, pairs(&[("sort", "rating"), ("skip", "15")]));
}

#[test]
fn page_query_preserves_filters_and_overrides_skip() {
    let current = query::parse("?sort=rating").unwrap();
    assert_eq!(query::page_query(&current, 15).unwrap(), "sort=rating&skip=15");

    let current = query::parse("?skip=0&genre=horror&genre=mystery").unwrap();
    assert_eq!(
        query::page_query(&current, 30).unwrap(),
        "skip=30&genre=horror&genre=mystery"
    );
}

#[test]
fn form_query_drops_empty_values() {
    let entries = pairs(&[
        ("genre", "A"),
        ("genre", "B"),
        ("difficulty", ""),
        ("players", "3"),
    ]);
    let encoded = query::form_query(&entries).unwrap();
    assert_eq!(encoded, "genre=A&genre=B&players=3");
    assert!(!encoded.contains("difficulty"));
}

#[test]
fn filter_and_sort_urls() {
    let entries = pairs(&[("q", ""), ("fear_level", "4")]);
    assert_eq!(
        crate::filters::filter_url("/", &entries).unwrap(),
        "/?fear_level=4"
    );
    assert_eq!(crate::filters::filter_url("/", &[]).unwrap(), "/?");

    let url = crate::filters::sort_url("/", "?genre=horror&sort=new&skip=15", "rating").unwrap();
    assert_eq!(url, "/?genre=horror&sort=rating&skip=15");
    let url = crate::filters::sort_url("/quests", "", "price").unwrap();
    assert_eq!(url, "/quests?sort=price");
}

#[test]
fn filter_state_from_scenario_url() {
    let params = query::parse("?fear_level=3&players=2&genre=horror&genre=mystery").unwrap();
    let state = FilterState::from_query(&params);
    assert_eq!(state.fear_level, Some(3));
    assert_eq!(state.players, Some(2));
    assert_eq!(
        state.genres,
        BTreeSet::from(["horror".to_string(), "mystery".to_string()])
    );
    assert!(state.difficulties.is_empty());
    assert_eq!(state.skip, 0);
    assert_eq!(state.sort, None);
}

#[test]
fn filter_state_ignores_malformed_values() {
    let params = pairs(&[
        ("fear_level", "lots"),
        ("players", ""),
        ("skip", "-3"),
        ("genre", ""),
        ("sort", ""),
        ("sort", "rating"),
    ]);
    let state = FilterState::from_query(&params);
    assert_eq!(state.fear_level, None);
    assert_eq!(state.players, None);
    assert_eq!(state.skip, 0);
    assert!(state.genres.is_empty());
    assert_eq!(state.sort.as_deref(), Some("rating"));
}

#[test]
fn ratings_parse_numerically_beyond_one_digit() {
    // Multi-digit values compare as numbers, not text.
    assert_eq!(parse_rating("10"), Some(10));
    assert!(glyph_active(2, parse_rating("10")));
    assert!(!glyph_active(2, parse_rating("2")));
}

#[test]
fn filter_state_to_query_is_stable() {
    let params = query::parse("?players=2&genre=mystery&genre=horror&sort=rating&skip=30").unwrap();
    let state = FilterState::from_query(&params);
    assert_eq!(
        query::encode(&state.to_query()).unwrap(),
        "genre=horror&genre=mystery&players=2&sort=rating&skip=30"
    );
    assert_eq!(FilterState::from_query(&state.to_query()), state);
}

#[test]
fn selections_only_for_multi_select_fields() {
    let state = FilterState::default();
    assert!(state.selections("genre").is_some());
    assert!(state.selections("difficulty").is_some());
    assert!(state.selections("sort").is_none());
    assert_eq!(state.rating(RatingKind::Fear), None);
}

#[test]
fn clicking_glyph_activates_exactly_the_first_v() {
    let n = 5;
    for v in 1..=n {
        let mask = active_glyphs(n, Some(v));
        for (i, active) in mask.iter().enumerate() {
            assert_eq!(*active, (i as u32) < v, "glyph {} after clicking {}", i + 1, v);
        }
        assert_eq!(mask.iter().filter(|a| **a).count() as u32, v);
    }
}

#[test]
fn rating_without_value_or_above_range() {
    assert_eq!(active_glyphs(5, None), vec![false; 5]);
    assert_eq!(active_glyphs(5, Some(0)), vec![false; 5]);
    assert_eq!(active_glyphs(5, Some(9)), vec![true; 5]);
}

#[test]
fn rating_kinds_have_distinct_glyphs() {
    assert_eq!(RatingKind::Fear.glyph_class(), "star");
    assert_eq!(RatingKind::Players.glyph_class(), "circle");
    assert_ne!(RatingKind::Fear.glyph(), RatingKind::Players.glyph());
}

#[test]
fn offset_advances_by_cards_returned() {
    let mut pager = Pager::new(0);
    let mut expected = 0u64;
    for added in [PAGE_SIZE, PAGE_SIZE, PAGE_SIZE] {
        pager = load(pager, added);
        expected += added as u64;
        assert_eq!(pager.skip, expected);
        assert_eq!(pager.phase, PagerPhase::Ready);
    }
}

#[test]
fn full_page_keeps_control_enabled() {
    let pager = load(Pager::new(15), 15);
    assert_eq!(pager.skip, 30);
    assert!(!pager.disabled());
    assert!(!pager.hidden());
}

#[test]
fn short_page_hides_control_for_good() {
    let pager = load(Pager::new(15), 4);
    assert_eq!(pager.skip, 19);
    assert!(pager.hidden());
    assert!(pager.disabled());

    let again = step(pager.clone(), PagerAction::Begin);
    assert_eq!(again, pager);
}

#[test]
fn empty_page_hides_control() {
    let pager = load(Pager::new(30), 0);
    assert_eq!(pager.skip, 30);
    assert_eq!(pager.phase, PagerPhase::Finished);
}

#[test]
fn missing_grid_is_terminal() {
    let pager = step(step(Pager::new(15), PagerAction::Begin), PagerAction::NoGrid);
    assert_eq!(pager.phase, PagerPhase::Exhausted);
    assert!(pager.disabled());
    assert!(!pager.hidden());
    assert_eq!(step(pager.clone(), PagerAction::Begin), pager);
}

#[test]
fn failures_allow_retry() {
    let labels = Labels::default();
    let pager = step(step(Pager::new(15), PagerAction::Begin), PagerAction::HttpFailed(500));
    assert_eq!(pager.phase, PagerPhase::Failed(Failure::Http(500)));
    assert!(!pager.disabled());
    assert_eq!(pager.label(&labels), labels.http_error);
    assert_eq!(pager.skip, 15);

    let pager = step(step(pager, PagerAction::Begin), PagerAction::NetworkFailed);
    assert_eq!(pager.label(&labels), labels.network_error);
    assert_ne!(labels.http_error, labels.network_error);

    let pager = load(pager, PAGE_SIZE);
    assert_eq!(pager.skip, 30);
    assert_eq!(pager.label(&labels), labels.load_more);
}

#[test]
fn only_one_request_in_flight() {
    let loading = step(Pager::new(0), PagerAction::Begin);
    assert_eq!(loading.phase, PagerPhase::Loading);
    assert!(loading.disabled());
    assert_eq!(step(loading.clone(), PagerAction::Begin), loading);
    assert_eq!(loading.label(&Labels::default()), "Loading...");
}

#[test]
fn completions_without_request_are_ignored() {
    let idle = Pager::new(15);
    assert_eq!(step(idle.clone(), PagerAction::Loaded { added: 15 }), idle);
    assert_eq!(step(idle.clone(), PagerAction::NoGrid), idle);
}

#[test]
fn config_defaults_match_page_markup() {
    let config = PageConfig::default();
    assert_eq!(config.endpoint, "/api/quests");
    assert_eq!(config.load_more_id, "load-more");
    assert_eq!(config.results_selector, ".cards-grid");
    assert_eq!(config.level(), log::LevelFilter::Info);
}

#[test]
fn config_json_overrides_only_given_fields() {
    let config = PageConfig::from_json(
        r#"{"endpoint":"/api/v2/quests","labels":{"loading":"Загрузка..."},"log_level":"debug"}"#,
    )
    .unwrap();
    assert_eq!(config.endpoint, "/api/v2/quests");
    assert_eq!(config.navigate_path, "/");
    assert_eq!(config.labels.loading, "Загрузка...");
    assert_eq!(config.labels.load_more, Labels::default().load_more);
    assert_eq!(config.level(), log::LevelFilter::Debug);
}

#[test]
fn config_rejects_bad_json() {
    assert!(PageConfig::from_json("{not json").is_err());
    let config = PageConfig::from_json(r#"{"log_level":"chatty"}"#).unwrap();
    assert_eq!(config.level(), log::LevelFilter::Info);
}

#[test]
fn log_level_off_skips_logger() {
    let config = PageConfig::from_json(r#"{"log_level":"off"}"#).unwrap();
    assert_eq!(config.level(), log::LevelFilter::Off);
    assert!(config.level().to_level().is_none());
    assert_eq!(
        PageConfig::default().level().to_level(),
        Some(log::Level::Info)
    );
}
