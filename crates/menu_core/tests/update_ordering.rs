mod common;

use common::*;
use menu_core::{update, BrowseState, MealQuery, Msg};
use pretty_assertions::assert_eq;

/// Category click, then a search edit inside the debounce window. Returns the
/// state after both fetches were issued, with their generations.
fn category_then_search() -> (BrowseState, u64, u64) {
    let state = loaded_session(&["Beef stew"]);
    let (state, effects) = update(state, Msg::CategorySelected(Some("Dessert".to_string())));
    let (category_generation, _) = meal_fetches(&effects)[0].clone();

    let (state, effects) = type_and_wait(state, "cake");
    let fetches = meal_fetches(&effects);
    assert_eq!(fetches.len(), 1);
    let (search_generation, query) = fetches[0].clone();
    assert_eq!(query, MealQuery::Search("cake".to_string()));

    (state, category_generation, search_generation)
}

#[test]
fn search_wins_when_category_answer_arrives_first() {
    init_logging();
    let (state, category_generation, search_generation) = category_then_search();

    let (state, _) = update(
        state,
        Msg::MealsLoaded {
            generation: category_generation,
            result: Ok(meals(&["Apple crumble", "Bakewell tart"])),
        },
    );
    assert!(state.is_loading());
    let (state, _) = update(
        state,
        Msg::MealsLoaded {
            generation: search_generation,
            result: Ok(meals(&["Carrot cake"])),
        },
    );

    assert_eq!(names(&state), vec!["Carrot cake"]);
    assert!(!state.is_loading());
}

#[test]
fn search_wins_when_category_answer_arrives_last() {
    init_logging();
    let (state, category_generation, search_generation) = category_then_search();

    let (state, _) = update(
        state,
        Msg::MealsLoaded {
            generation: search_generation,
            result: Ok(meals(&["Carrot cake"])),
        },
    );
    let (state, _) = update(
        state,
        Msg::MealsLoaded {
            generation: category_generation,
            result: Ok(meals(&["Apple crumble", "Bakewell tart"])),
        },
    );

    assert_eq!(names(&state), vec!["Carrot cake"]);
    assert!(!state.is_loading());
}

#[test]
fn stale_failure_does_not_surface() {
    init_logging();
    let (state, category_generation, search_generation) = category_then_search();

    let (state, _) = update(
        state,
        Msg::MealsLoaded {
            generation: search_generation,
            result: Ok(meals(&["Carrot cake"])),
        },
    );
    let (state, _) = update(
        state,
        Msg::MealsLoaded {
            generation: category_generation,
            result: Err("network error".to_string()),
        },
    );

    assert_eq!(state.view().error, None);
    assert_eq!(names(&state), vec!["Carrot cake"]);
}

#[test]
fn outstanding_fetch_stops_counting_as_loading_after_new_edit() {
    init_logging();
    let state = loaded_session(&["Beef stew"]);
    let (state, _) = update(state, Msg::CategorySelected(Some("Goat".to_string())));
    assert!(state.is_loading());

    let (state, _) = update(state, Msg::SearchEdited("g".to_string()));
    assert!(!state.is_loading());

    // Nothing newer was sent yet, so the category answer still lands.
    let (mut state, _) = update(
        state,
        Msg::MealsLoaded {
            generation: 1,
            result: Ok(meals(&["Goat curry"])),
        },
    );
    assert_eq!(names(&state), vec!["Goat curry"]);
    assert!(state.consume_dirty());
}

#[test]
fn only_issued_fetch_lands_during_a_later_edit_window() {
    init_logging();
    let state = loaded_session(&["Beef stew"]);
    let (state, effects) = type_and_wait(state, "chicken");
    assert_eq!(
        meal_fetches(&effects),
        vec![(1, MealQuery::Search("chicken".to_string()))]
    );

    let (state, effects) = update(state, Msg::SearchEdited("chicken ".to_string()));
    let pending = scheduled(&effects).expect("scheduled");
    let (state, _) = update(
        state,
        Msg::MealsLoaded {
            generation: 1,
            result: Ok(meals(&["Chicken Handi"])),
        },
    );
    assert_eq!(names(&state), vec!["Chicken Handi"]);
    assert!(!state.is_loading());

    // The trimmed query is already on screen.
    let (state, effects) = update(state, Msg::SearchDebounceElapsed { generation: pending });
    assert!(meal_fetches(&effects).is_empty());
    assert_eq!(names(&state), vec!["Chicken Handi"]);
    assert!(!state.is_loading());
}

#[test]
fn same_query_edit_waits_for_the_outstanding_fetch() {
    init_logging();
    let state = loaded_session(&["Beef stew"]);
    let (state, _) = type_and_wait(state, "chicken");

    let (state, effects) = type_and_wait(state, " chicken");
    assert!(meal_fetches(&effects).is_empty());
    assert!(state.is_loading());

    let (state, _) = update(
        state,
        Msg::MealsLoaded {
            generation: 1,
            result: Ok(meals(&["Chicken Handi"])),
        },
    );
    assert_eq!(names(&state), vec!["Chicken Handi"]);
    assert!(!state.is_loading());
}

#[test]
fn returning_to_shown_query_drops_the_abandoned_fetch() {
    init_logging();
    let state = loaded_session(&["Beef stew"]);
    let (state, _) = type_and_wait(state, "x");

    let (state, effects) = type_and_wait(state, "");
    assert!(meal_fetches(&effects).is_empty());
    assert!(!state.is_loading());

    let (state, _) = update(
        state,
        Msg::MealsLoaded {
            generation: 1,
            result: Ok(meals(&["Xacuti"])),
        },
    );
    assert_eq!(names(&state), vec!["Beef stew"]);
    assert!(!state.is_loading());
}
