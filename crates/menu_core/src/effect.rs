use std::time::Duration;

use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCategories,
    FetchMeals {
        generation: Generation,
        query: MealQuery,
    },
    /// Start (or restart) the debounce timer; answer with `Msg::SearchDebounceElapsed`.
    ScheduleSearch {
        generation: Generation,
        delay: Duration,
    },
    CancelScheduledSearch,
    FetchMealDetails {
        meal_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealQuery {
    Category(String),
    Search(String),
}
