//! Response bodies as the catalog serves them.
//!
//! Every list is nullable: `{"meals": null}` is how the catalog says "no match".

use serde::Deserialize;

use crate::{Category, Meal};

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesBody {
    #[serde(default)]
    pub categories: Option<Vec<RawCategory>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MealsBody {
    #[serde(default)]
    pub meals: Option<Vec<RawMeal>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCategory {
    #[serde(rename = "idCategory")]
    id: String,
    #[serde(rename = "strCategory")]
    name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
}

impl From<RawCategory> for Category {
    fn from(raw: RawCategory) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
        }
    }
}

impl From<RawMeal> for Meal {
    fn from(raw: RawMeal) -> Self {
        let tags = raw
            .tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            id: raw.id,
            name: raw.name,
            thumbnail: raw.thumbnail.unwrap_or_default(),
            category: non_blank(raw.category),
            area: non_blank(raw.area),
            instructions: non_blank(raw.instructions),
            tags,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
