use crate::Meal;

pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowseViewModel {
    pub search_query: String,
    /// "All" first, then one per category in catalog order.
    pub category_buttons: Vec<CategoryButton>,
    /// Empty while loading.
    pub cards: Vec<MealCard>,
    /// Skeleton cards to draw in place of `cards`.
    pub placeholders: usize,
    pub is_loading: bool,
    pub error: Option<String>,
    pub details: Option<DetailsView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub label: String,
    pub category: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealCard {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: Option<String>,
    pub area: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub meal_id: String,
    /// `None` while the lookup is outstanding.
    pub meal: Option<Meal>,
}
