pub mod client;
pub mod models;

pub use client::{MovieSource, MoviesClient, MoviesError, DEFAULT_BASE_URL};
pub use models::{Movie, MoviesEnvelope};
