#![allow(dead_code)]

use std::sync::Once;

use menu_core::{
    init, update, BrowseSettings, BrowseState, Category, Effect, Generation, Meal, MealQuery, Msg,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(menu_logging::initialize_for_tests);
}

pub fn meal(id: &str, name: &str) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: format!("https://img.example/{id}.jpg"),
        ..Meal::default()
    }
}

pub fn meals(names: &[&str]) -> Vec<Meal> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| meal(&format!("{}", 50000 + index), name))
        .collect()
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn meal_fetches(effects: &[Effect]) -> Vec<(Generation, MealQuery)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::FetchMeals { generation, query } => Some((*generation, query.clone())),
            _ => None,
        })
        .collect()
}

pub fn scheduled(effects: &[Effect]) -> Option<Generation> {
    effects.iter().find_map(|effect| match effect {
        Effect::ScheduleSearch { generation, .. } => Some(*generation),
        _ => None,
    })
}

/// Mounted session whose initial category fetch has already completed.
pub fn loaded_session(initial: &[&str]) -> BrowseState {
    let (state, _) = init(BrowseSettings::default());
    let (mut state, _) = update(
        state,
        Msg::MealsLoaded {
            generation: 0,
            result: Ok(meals(initial)),
        },
    );
    state.consume_dirty();
    state
}

/// Edits the search field and lets the debounce window run out.
pub fn type_and_wait(state: BrowseState, text: &str) -> (BrowseState, Vec<Effect>) {
    let (state, effects) = update(state, Msg::SearchEdited(text.to_string()));
    let generation = scheduled(&effects).expect("search scheduled");
    update(state, Msg::SearchDebounceElapsed { generation })
}

pub fn names(state: &BrowseState) -> Vec<String> {
    state.meals().iter().map(|m| m.name.clone()).collect()
}
