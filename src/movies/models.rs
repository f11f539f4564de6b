use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A movie as returned by the movies API
///
/// Only `id` is interpreted by the results view (as a list key). The display
/// fields are read by the card renderer; anything else the API sends is kept
/// verbatim in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            year: None,
            poster: None,
            kind: None,
            extra: Map::new(),
        }
    }

    /// Title for display, falling back to the identifier
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    /// Poster URL, if the API sent a usable one ("N/A" means none)
    pub fn poster_url(&self) -> Option<&str> {
        self.poster
            .as_deref()
            .filter(|url| !url.is_empty() && *url != "N/A")
    }
}

/// Response envelope for `GET /v1/movies`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviesEnvelope {
    pub data: Vec<Movie>,
}
