use crate::{BrowseState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: BrowseState, msg: Msg) -> (BrowseState, Vec<Effect>) {
    let effects = match msg {
        Msg::CategorySelected(category) => {
            if state.selected_category() == category.as_deref() {
                return (state, Vec::new());
            }
            let superseded_search = state.select_category(category);
            let mut effects = Vec::with_capacity(1 + usize::from(superseded_search));
            if superseded_search {
                effects.push(Effect::CancelScheduledSearch);
            }
            // A non-blank search keeps precedence over the new category.
            effects.push(state.issue_meals_fetch());
            effects
        }
        Msg::SearchEdited(text) => {
            if text == state.search_query() {
                return (state, Vec::new());
            }
            let generation = state.edit_search(text);
            vec![Effect::ScheduleSearch {
                generation,
                delay: state.settings().debounce,
            }]
        }
        Msg::SearchDebounceElapsed { generation } => {
            if state.take_pending_search(generation) {
                state.settle_search().into_iter().collect()
            } else {
                Vec::new()
            }
        }
        Msg::CategoriesLoaded(result) => {
            state.apply_categories(result);
            Vec::new()
        }
        Msg::MealsLoaded { generation, result } => {
            state.apply_meals(generation, result);
            Vec::new()
        }
        Msg::MealSelected { meal_id } => {
            state.request_details(meal_id.clone());
            vec![Effect::FetchMealDetails { meal_id }]
        }
        Msg::MealDetailsLoaded { meal_id, result } => {
            state.apply_details(&meal_id, result);
            Vec::new()
        }
        Msg::DetailsClosed => {
            state.close_details();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
