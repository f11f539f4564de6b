use crate::movies::Movie;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Shown when the first load of the page fails
pub const INITIAL_LOAD_FAILED: &str = "An error occurred";
/// Shown when a submitted search fails
pub const SEARCH_FAILED: &str = "No matching movies found";

/// Everything the results page renders from
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub movies: Vec<Movie>,
    /// True until the first fetch settles, then false for good
    pub loading: bool,
    /// True while a submitted search is pending
    pub searching: bool,
    /// When set, `movies` is stale and not rendered
    pub error_message: Option<String>,
    /// Current contents of the search box
    pub query: String,
}

impl ViewState {
    pub fn initial() -> Self {
        Self {
            movies: Vec::new(),
            loading: true,
            searching: false,
            error_message: None,
            query: String::new(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Which operation a fetch belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    Search,
}

impl FetchKind {
    pub fn failure_message(self) -> &'static str {
        match self {
            FetchKind::Initial => INITIAL_LOAD_FAILED,
            FetchKind::Search => SEARCH_FAILED,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown search policy: {0} (expected \"latest-wins\" or \"first-in-flight-blocks-new\")")]
pub struct UnknownSearchPolicy(pub String);

/// What to do when a search is submitted while another fetch is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPolicy {
    /// The new search supersedes everything in flight
    #[default]
    LatestWins,
    /// The new search is dropped until the pending fetch settles
    FirstInFlightBlocksNew,
}

impl SearchPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchPolicy::LatestWins => "latest-wins",
            SearchPolicy::FirstInFlightBlocksNew => "first-in-flight-blocks-new",
        }
    }
}

impl FromStr for SearchPolicy {
    type Err = UnknownSearchPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest-wins" => Ok(SearchPolicy::LatestWins),
            "first-in-flight-blocks-new" => Ok(SearchPolicy::FirstInFlightBlocksNew),
            _ => Err(UnknownSearchPolicy(s.to_string())),
        }
    }
}

pub const DEFAULT_DISPLAY_DELAY: Duration = Duration::from_millis(1000);

/// Behavior knobs for a `ResultsView`
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsConfig {
    /// Pause between a successful response and showing it. Zero disables it.
    pub display_delay: Duration,
    pub search_policy: SearchPolicy,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            display_delay: DEFAULT_DISPLAY_DELAY,
            search_policy: SearchPolicy::default(),
        }
    }
}
