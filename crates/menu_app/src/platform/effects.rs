use menu_catalog::{CatalogSettings, EngineError, EngineEvent, EngineHandle};
use menu_core::{Category, Effect, Meal, MealQuery, Msg};
use menu_logging::{menu_debug, menu_info, menu_warn};

/// Turns core effects into engine commands and engine events back into
/// messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: CatalogSettings) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCategories => {
                    menu_info!("FetchCategories");
                    self.engine.list_categories();
                }
                Effect::FetchMeals { generation, query } => {
                    menu_info!("FetchMeals generation={} query={:?}", generation, query);
                    self.engine.list_meals(generation, map_query(query));
                }
                Effect::ScheduleSearch { generation, delay } => {
                    self.engine.schedule_debounce(generation, delay);
                }
                Effect::CancelScheduledSearch => self.engine.cancel_debounce(),
                Effect::FetchMealDetails { meal_id } => {
                    menu_info!("FetchMealDetails id={}", meal_id);
                    self.engine.lookup_meal(meal_id);
                }
            }
        }
    }

    /// Collects every engine event that has arrived so far.
    pub fn drain(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(event_to_msg)
            .collect()
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CategoriesFetched(result) => Msg::CategoriesLoaded(
            result
                .map(|categories| categories.into_iter().map(map_category).collect())
                .map_err(|err| {
                    menu_warn!("Failed to fetch categories: {}", err);
                    err.to_string()
                }),
        ),
        EngineEvent::MealsFetched { ticket, result } => {
            let result = result
                .map(|meals| meals.into_iter().map(map_meal).collect::<Vec<_>>())
                .map_err(|err| {
                    menu_warn!("Failed to fetch meals for generation {}: {}", ticket, err);
                    err.to_string()
                });
            if let Ok(meals) = &result {
                menu_debug!("generation {} returned {} meals", ticket, meals.len());
            }
            Msg::MealsLoaded {
                generation: ticket,
                result,
            }
        }
        EngineEvent::MealLooked { id, result } => {
            let result = result.map(|meal| meal.map(map_meal)).map_err(|err| {
                menu_warn!("Failed to look up meal {}: {}", id, err);
                err.to_string()
            });
            Msg::MealDetailsLoaded {
                meal_id: id,
                result,
            }
        }
        EngineEvent::DebounceElapsed { ticket } => {
            Msg::SearchDebounceElapsed { generation: ticket }
        }
    }
}

fn map_query(query: MealQuery) -> menu_catalog::MealQuery {
    match query {
        MealQuery::Category(category) => menu_catalog::MealQuery::Category(category),
        MealQuery::Search(text) => menu_catalog::MealQuery::Search(text),
    }
}

fn map_category(category: menu_catalog::Category) -> Category {
    Category {
        id: category.id,
        name: category.name,
    }
}

fn map_meal(meal: menu_catalog::Meal) -> Meal {
    Meal {
        id: meal.id,
        name: meal.name,
        thumbnail: meal.thumbnail,
        category: meal.category,
        area: meal.area,
        instructions: meal.instructions,
        tags: meal.tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_catalog::{FailureKind, RequestError};
    use pretty_assertions::assert_eq;

    #[test]
    fn debounce_ticket_becomes_generation() {
        assert_eq!(
            event_to_msg(EngineEvent::DebounceElapsed { ticket: 9 }),
            Msg::SearchDebounceElapsed { generation: 9 }
        );
    }

    #[test]
    fn failures_become_message_strings() {
        let err = RequestError {
            kind: FailureKind::HttpStatus(502),
            message: "502 Bad Gateway".to_string(),
        };
        assert_eq!(
            event_to_msg(EngineEvent::MealsFetched {
                ticket: 3,
                result: Err(err),
            }),
            Msg::MealsLoaded {
                generation: 3,
                result: Err("http status 502: 502 Bad Gateway".to_string()),
            }
        );
    }

    #[test]
    fn catalog_meals_keep_every_field() {
        let meal = menu_catalog::Meal {
            id: "52772".to_string(),
            name: "Teriyaki Chicken Casserole".to_string(),
            thumbnail: "https://img/t.jpg".to_string(),
            category: Some("Chicken".to_string()),
            area: Some("Japanese".to_string()),
            instructions: Some("Bake.".to_string()),
            tags: vec!["Meat".to_string()],
        };
        let mapped = map_meal(meal);
        assert_eq!(mapped.area.as_deref(), Some("Japanese"));
        assert_eq!(mapped.tags, vec!["Meat".to_string()]);
    }
}
