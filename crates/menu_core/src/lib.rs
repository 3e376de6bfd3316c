//! Menu core: pure browse state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, MealQuery};
pub use msg::Msg;
pub use state::{
    init, BrowseSettings, BrowseState, Category, Generation, LoadError, LoadTarget, Meal,
    DEFAULT_CATEGORY, DEFAULT_DEBOUNCE, DEFAULT_PLACEHOLDERS,
};
pub use update::update;
pub use view_model::{BrowseViewModel, CategoryButton, DetailsView, MealCard, ALL_LABEL};
