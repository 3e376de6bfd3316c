//! Menu catalog: recipe API client and the engine that runs it.
mod client;
mod debounce;
mod engine;
mod types;
mod wire;

pub use client::{CatalogClient, CatalogSettings, ReqwestCatalog, DEFAULT_BASE_URL};
pub use debounce::Debouncer;
pub use engine::{EngineError, EngineHandle};
pub use types::{Category, EngineEvent, FailureKind, Meal, MealQuery, RequestError, Ticket};
