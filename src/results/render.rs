use crate::movies::Movie;
use crate::results::state::ViewState;

/// Props for the search control
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBox {
    pub query: String,
    pub searching: bool,
}

/// Body under the search control
#[derive(Debug, Clone, PartialEq)]
pub enum Results {
    NoResults,
    /// One card per movie, keyed by `Movie::id`
    Grid(Vec<Movie>),
}

/// What the results page shows for a given state
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsPage {
    /// Nothing at all; the first fetch has not settled
    Blank,
    /// Only the error text, no search control and no results
    Error(String),
    Listing { search: SearchBox, results: Results },
}

impl ResultsPage {
    /// Card keys in display order; empty unless a grid is shown
    pub fn card_keys(&self) -> Vec<&str> {
        match self {
            ResultsPage::Listing {
                results: Results::Grid(movies),
                ..
            } => movies.iter().map(|movie| movie.id.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

pub fn render(state: &ViewState) -> ResultsPage {
    if state.loading {
        return ResultsPage::Blank;
    }

    if let Some(message) = &state.error_message {
        return ResultsPage::Error(message.clone());
    }

    let results = if state.movies.is_empty() {
        Results::NoResults
    } else {
        Results::Grid(state.movies.clone())
    };

    ResultsPage::Listing {
        search: SearchBox {
            query: state.query.clone(),
            searching: state.searching,
        },
        results,
    }
}
