use crate::movies::Movie;
use crate::results::{render, Results, ResultsPage, ResultsView};
use crate::ui::components::{MovieCard, SearchInput};
use crate::ui::AppContext;
use dioxus::prelude::*;
use futures::StreamExt;
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

/// Movie search results page
///
/// Hosts one `ResultsView` for the lifetime of the component: started on
/// mount, stopped on drop, its state mirrored into a signal for rendering.
#[component]
pub fn MoviesPage() -> Element {
    let context = use_context::<AppContext>();
    let view = use_hook(|| {
        ResultsView::new(
            context.movie_source.clone(),
            context.config.results_config(),
            context.runtime.clone(),
        )
    });
    let mut state = use_signal(|| view.snapshot());

    use_effect({
        let view = view.clone();
        move || {
            let view = view.clone();
            view.start();
            spawn(async move {
                let mut updates = WatchStream::new(view.subscribe());
                while let Some(next) = updates.next().await {
                    state.set(next);
                }
                debug!("Results view state channel closed");
            });
        }
    });

    use_drop({
        let view = view.clone();
        move || view.stop()
    });

    let page = render(&state.read());
    match page {
        ResultsPage::Blank => rsx! {},
        ResultsPage::Error(message) => rsx! {
            span { class: "results-error", "{message}" }
        },
        ResultsPage::Listing { search, results } => rsx! {
            div { class: "container",
                div { class: "results-row",
                    div { class: "search-column",
                        SearchInput {
                            query: search.query,
                            searching: search.searching,
                            on_submit: {
                                let view = view.clone();
                                move |_: ()| {
                                    view.submit_search();
                                }
                            },
                            on_change: {
                                let view = view.clone();
                                move |value: String| view.update_query(value)
                            },
                        }
                    }
                }
                {
                    match results {
                        Results::NoResults => rsx! {
                            div { class: "no-results", "No results found" }
                        },
                        Results::Grid(movies) => rsx! {
                            MovieGrid { movies }
                        },
                    }
                }
            }
        },
    }
}

/// Grid of movie cards, keyed by movie id
#[component]
fn MovieGrid(movies: Vec<Movie>) -> Element {
    rsx! {
        div { class: "results-row movie-grid",
            for movie in movies {
                div { key: "{movie.id}", class: "movie-grid-cell",
                    MovieCard { movie: movie.clone() }
                }
            }
        }
    }
}
