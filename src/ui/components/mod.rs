mod movie_card;
mod movies_page;
mod search_input;

pub use movie_card::MovieCard;
pub use movies_page::MoviesPage;
pub use search_input::SearchInput;
