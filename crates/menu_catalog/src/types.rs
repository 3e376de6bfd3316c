use std::fmt;

/// Correlates a meals request with its answer. Chosen by the caller.
pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    /// Absent in by-category listings.
    pub category: Option<String>,
    /// Absent in by-category listings.
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub tags: Vec<String>,
}

/// What a meals listing should be filtered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealQuery {
    Category(String),
    Search(String),
    FirstLetter(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CategoriesFetched(Result<Vec<Category>, RequestError>),
    MealsFetched {
        ticket: Ticket,
        result: Result<Vec<Meal>, RequestError>,
    },
    MealLooked {
        id: String,
        result: Result<Option<Meal>, RequestError>,
    },
    DebounceElapsed {
        ticket: Ticket,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct RequestError {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
