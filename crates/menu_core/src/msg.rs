use crate::{Category, Generation, Meal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a category; `None` is the "All" button.
    CategorySelected(Option<String>),
    /// User edited the search field. Carries the full field text.
    SearchEdited(String),
    /// The quiescence window scheduled for `generation` ran out.
    SearchDebounceElapsed { generation: Generation },
    /// Answer to the one-time category listing.
    CategoriesLoaded(Result<Vec<Category>, String>),
    /// Answer to the meals fetch issued for `generation`.
    MealsLoaded {
        generation: Generation,
        result: Result<Vec<Meal>, String>,
    },
    /// User opened the details of a card.
    MealSelected { meal_id: String },
    /// Answer to a by-id lookup.
    MealDetailsLoaded {
        meal_id: String,
        result: Result<Option<Meal>, String>,
    },
    /// User dismissed the details overlay.
    DetailsClosed,
    /// Render tick.
    Tick,
    NoOp,
}
