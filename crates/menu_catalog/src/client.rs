use menu_logging::menu_debug;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::wire::{CategoriesBody, MealsBody};
use crate::{Category, FailureKind, Meal, MealQuery, RequestError};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub base_url: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Read-only access to the recipe catalog.
///
/// Every call is a single request: no retries, no caching. A catalog answer of
/// "nothing found" is an empty result, never an error.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, RequestError>;

    async fn list_meals_by_category(&self, category: &str) -> Result<Vec<Meal>, RequestError>;

    async fn search_meals(&self, query: &str) -> Result<Vec<Meal>, RequestError>;

    async fn search_meals_by_first_letter(&self, letter: char) -> Result<Vec<Meal>, RequestError>;

    async fn get_meal_by_id(&self, id: &str) -> Result<Option<Meal>, RequestError>;

    async fn list_meals(&self, query: &MealQuery) -> Result<Vec<Meal>, RequestError> {
        match query {
            MealQuery::Category(category) => self.list_meals_by_category(category).await,
            MealQuery::Search(text) => self.search_meals(text).await,
            MealQuery::FirstLetter(letter) => self.search_meals_by_first_letter(*letter).await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestCatalog {
    pub fn new(settings: CatalogSettings) -> Result<Self, RequestError> {
        Url::parse(&settings.base_url)
            .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, name: &str, params: &[(&str, &str)]) -> Result<Url, RequestError> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, name))
            .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RequestError> {
        menu_debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body)
            .map_err(|err| RequestError::new(FailureKind::Decode, err.to_string()))
    }

    async fn get_meals(&self, url: Url) -> Result<Vec<Meal>, RequestError> {
        let body: MealsBody = self.get_json(url).await?;
        Ok(body
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(Meal::from)
            .collect())
    }
}

#[async_trait::async_trait]
impl CatalogClient for ReqwestCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, RequestError> {
        let url = self.endpoint("categories.php", &[])?;
        let body: CategoriesBody = self.get_json(url).await?;
        Ok(body
            .categories
            .unwrap_or_default()
            .into_iter()
            .map(Category::from)
            .collect())
    }

    async fn list_meals_by_category(&self, category: &str) -> Result<Vec<Meal>, RequestError> {
        let url = self.endpoint("filter.php", &[("c", category)])?;
        self.get_meals(url).await
    }

    async fn search_meals(&self, query: &str) -> Result<Vec<Meal>, RequestError> {
        let url = self.endpoint("search.php", &[("s", query)])?;
        self.get_meals(url).await
    }

    async fn search_meals_by_first_letter(&self, letter: char) -> Result<Vec<Meal>, RequestError> {
        let letter = letter.to_string();
        let url = self.endpoint("search.php", &[("f", letter.as_str())])?;
        self.get_meals(url).await
    }

    async fn get_meal_by_id(&self, id: &str) -> Result<Option<Meal>, RequestError> {
        let url = self.endpoint("lookup.php", &[("i", id)])?;
        Ok(self.get_meals(url).await?.into_iter().next())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_decode() {
        return RequestError::new(FailureKind::Decode, err.to_string());
    }
    RequestError::new(FailureKind::Network, err.to_string())
}
