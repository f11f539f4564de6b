use crate::movies::Movie;
use dioxus::prelude::*;

/// Individual movie card component
#[component]
pub fn MovieCard(movie: Movie) -> Element {
    let title = movie.display_title().to_string();

    rsx! {
        div { class: "movie-card",
            div { class: "movie-card-poster",
                if let Some(poster) = movie.poster_url() {
                    img { src: "{poster}", alt: "Poster for {title}" }
                } else {
                    div { class: "movie-card-placeholder", "🎬" }
                }
            }
            div { class: "movie-card-info",
                h3 { class: "movie-card-title", title: "{title}", "{title}" }
                if let Some(year) = &movie.year {
                    p { class: "movie-card-year", "{year}" }
                }
                if let Some(kind) = &movie.kind {
                    p { class: "movie-card-kind", "{kind}" }
                }
            }
        }
    }
}
