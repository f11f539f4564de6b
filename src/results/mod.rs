pub mod render;
pub mod state;
pub mod view;

pub use render::{render, Results, ResultsPage, SearchBox};
pub use state::{
    FetchKind, ResultsConfig, SearchPolicy, UnknownSearchPolicy, ViewState, DEFAULT_DISPLAY_DELAY,
    INITIAL_LOAD_FAILED, SEARCH_FAILED,
};
pub use view::ResultsView;
