use std::time::Duration;

use crate::view_model::{BrowseViewModel, CategoryButton, DetailsView, MealCard, ALL_LABEL};
use crate::{Effect, MealQuery};

/// Tag attached to every user intent. Only answers carrying the current
/// generation may touch the displayed meals.
pub type Generation = u64;

pub const DEFAULT_CATEGORY: &str = "Beef";
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_PLACEHOLDERS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseSettings {
    /// Category browsed while "All" is selected.
    pub default_category: String,
    /// Quiescence window before a search edit is sent.
    pub debounce: Duration,
    /// Number of skeleton cards shown while loading.
    pub placeholder_count: usize,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            placeholder_count: DEFAULT_PLACEHOLDERS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
    Categories,
    Meals,
    Details,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub target: LoadTarget,
    pub message: String,
}

/// The latest meals fetch actually sent to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    /// Generation the fetch was issued under; its answer carries it back.
    issued: Generation,
    /// Most recent intent this fetch answers. Moves forward when a later
    /// edit resolves to the same query.
    serves: Generation,
    query: MealQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    settings: BrowseSettings,
    categories: Vec<Category>,
    meals: Vec<Meal>,
    /// Query that produced `meals`.
    shown_query: Option<MealQuery>,
    selected_category: Option<String>,
    search_query: String,
    generation: Generation,
    in_flight: Option<InFlight>,
    pending_search: Option<Generation>,
    last_error: Option<LoadError>,
    details_for: Option<String>,
    details: Option<Meal>,
    dirty: bool,
}

/// Creates the view session: the initial state plus the mount effects.
pub fn init(settings: BrowseSettings) -> (BrowseState, Vec<Effect>) {
    let mut state = BrowseState::new(settings);
    let fetch = state.issue_meals_fetch();
    (state, vec![Effect::FetchCategories, fetch])
}

impl BrowseState {
    pub fn new(settings: BrowseSettings) -> Self {
        Self {
            settings,
            categories: Vec::new(),
            meals: Vec::new(),
            shown_query: None,
            selected_category: None,
            search_query: String::new(),
            generation: 0,
            in_flight: None,
            pending_search: None,
            last_error: None,
            details_for: None,
            details: None,
            dirty: true,
        }
    }

    pub fn settings(&self) -> &BrowseSettings {
        &self.settings
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }

    /// True only while the fetch for the most recent intent is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(&self.in_flight, Some(fetch) if fetch.serves == self.generation)
    }

    /// What the meals list should show right now. A non-blank search wins
    /// over the category selection.
    pub fn active_query(&self) -> MealQuery {
        match self.search_query.trim() {
            "" => MealQuery::Category(
                self.selected_category
                    .clone()
                    .unwrap_or_else(|| self.settings.default_category.clone()),
            ),
            query => MealQuery::Search(query.to_string()),
        }
    }

    pub fn view(&self) -> BrowseViewModel {
        let is_loading = self.is_loading();
        let mut category_buttons = Vec::with_capacity(self.categories.len() + 1);
        category_buttons.push(CategoryButton {
            label: ALL_LABEL.to_string(),
            category: None,
            selected: self.selected_category.is_none(),
        });
        category_buttons.extend(self.categories.iter().map(|category| CategoryButton {
            label: category.name.clone(),
            category: Some(category.name.clone()),
            selected: self.selected_category.as_deref() == Some(category.name.as_str()),
        }));

        let listed_category = match &self.shown_query {
            Some(MealQuery::Category(category)) => Some(category.as_str()),
            _ => None,
        };
        let cards = if is_loading {
            Vec::new()
        } else {
            self.meals
                .iter()
                .map(|meal| MealCard {
                    id: meal.id.clone(),
                    name: meal.name.clone(),
                    thumbnail: meal.thumbnail.clone(),
                    category: meal
                        .category
                        .clone()
                        .or_else(|| listed_category.map(ToOwned::to_owned)),
                    area: meal.area.clone(),
                })
                .collect()
        };

        BrowseViewModel {
            search_query: self.search_query.clone(),
            category_buttons,
            cards,
            placeholders: if is_loading {
                self.settings.placeholder_count
            } else {
                0
            },
            is_loading,
            error: self.last_error.as_ref().map(describe_error),
            details: self.details_for.as_ref().map(|meal_id| DetailsView {
                meal_id: meal_id.clone(),
                meal: self.details.clone(),
            }),
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn next_generation(&mut self) -> Generation {
        self.generation += 1;
        self.generation
    }

    /// Returns true if a scheduled search was superseded.
    pub(crate) fn select_category(&mut self, category: Option<String>) -> bool {
        self.selected_category = category;
        self.next_generation();
        self.mark_dirty();
        self.pending_search.take().is_some()
    }

    pub(crate) fn edit_search(&mut self, text: String) -> Generation {
        self.search_query = text;
        let generation = self.next_generation();
        self.pending_search = Some(generation);
        self.mark_dirty();
        generation
    }

    /// Consumes the scheduled search if it belongs to the current intent.
    pub(crate) fn take_pending_search(&mut self, generation: Generation) -> bool {
        if generation != self.generation || self.pending_search != Some(generation) {
            return false;
        }
        self.pending_search = None;
        true
    }

    /// Fetch for a search that just left its debounce window, unless the
    /// catalog is already answering (or has answered) the same query.
    pub(crate) fn settle_search(&mut self) -> Option<Effect> {
        let query = self.active_query();
        if let Some(fetch) = self.in_flight.as_mut().filter(|fetch| fetch.query == query) {
            fetch.serves = self.generation;
            self.mark_dirty();
            return None;
        }
        if self.shown_query.as_ref() == Some(&query) {
            // Whatever is still outstanding answers an abandoned query.
            self.in_flight = None;
            self.clear_error(LoadTarget::Meals);
            self.mark_dirty();
            return None;
        }
        Some(self.issue_meals_fetch())
    }

    pub(crate) fn issue_meals_fetch(&mut self) -> Effect {
        let query = self.active_query();
        self.in_flight = Some(InFlight {
            issued: self.generation,
            serves: self.generation,
            query: query.clone(),
        });
        self.mark_dirty();
        Effect::FetchMeals {
            generation: self.generation,
            query,
        }
    }

    pub(crate) fn apply_categories(&mut self, result: Result<Vec<Category>, String>) {
        match result {
            Ok(categories) => {
                self.categories = categories;
                self.clear_error(LoadTarget::Categories);
            }
            Err(message) => self.set_error(LoadTarget::Categories, message),
        }
        self.mark_dirty();
    }

    pub(crate) fn apply_meals(
        &mut self,
        generation: Generation,
        result: Result<Vec<Meal>, String>,
    ) {
        // Only the latest fetch sent may land. Edits still inside their
        // debounce window have not sent anything, so they do not count.
        let fetch = match self.in_flight.take() {
            Some(fetch) if fetch.issued == generation => fetch,
            other => {
                self.in_flight = other;
                return;
            }
        };
        match result {
            Ok(meals) => {
                self.meals = meals;
                self.shown_query = Some(fetch.query);
                self.clear_error(LoadTarget::Meals);
            }
            Err(message) => self.set_error(LoadTarget::Meals, message),
        }
        self.mark_dirty();
    }

    pub(crate) fn request_details(&mut self, meal_id: String) {
        self.details_for = Some(meal_id);
        self.details = None;
        self.mark_dirty();
    }

    pub(crate) fn apply_details(&mut self, meal_id: &str, result: Result<Option<Meal>, String>) {
        if self.details_for.as_deref() != Some(meal_id) {
            return;
        }
        match result {
            Ok(Some(meal)) => {
                self.details = Some(meal);
                self.clear_error(LoadTarget::Details);
            }
            Ok(None) => {
                self.close_details();
                self.set_error(LoadTarget::Details, format!("meal {meal_id} not found"));
            }
            Err(message) => {
                self.close_details();
                self.set_error(LoadTarget::Details, message);
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn close_details(&mut self) {
        if self.details_for.take().is_some() {
            self.details = None;
            self.mark_dirty();
        }
    }

    fn set_error(&mut self, target: LoadTarget, message: String) {
        self.last_error = Some(LoadError { target, message });
    }

    fn clear_error(&mut self, target: LoadTarget) {
        if self.last_error.as_ref().map(|err| err.target) == Some(target) {
            self.last_error = None;
        }
    }
}

fn describe_error(err: &LoadError) -> String {
    let what = match err.target {
        LoadTarget::Categories => "categories",
        LoadTarget::Meals => "meals",
        LoadTarget::Details => "meal details",
    };
    format!("Failed to load {what}: {}", err.message)
}
