// Test support utilities for both unit and integration tests

use crate::movies::{Movie, MovieSource, MoviesError};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

#[derive(Debug, Clone)]
enum FakeResponse {
    Movies(Vec<Movie>),
    Status(StatusCode),
}

/// Fake movies API for testing
///
/// Answers from a per-query script instead of the network. Queries with no
/// scripted answer get an empty list. A gated source holds every request
/// until the test calls `release`.
pub struct FakeMovieSource {
    responses: Mutex<HashMap<Option<String>, FakeResponse>>,
    calls: Mutex<Vec<Option<String>>>,
    gate: Option<Arc<Semaphore>>,
}

impl Default for FakeMovieSource {
    fn default() -> Self {
        FakeMovieSource {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }
}

impl FakeMovieSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose requests stay pending until released
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::default()
        }
    }

    /// Answer `search` with `movies`
    pub fn respond(self, search: Option<&str>, movies: Vec<Movie>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(search.map(str::to_string), FakeResponse::Movies(movies));
        self
    }

    /// Answer `search` with an HTTP error status
    pub fn fail(self, search: Option<&str>, status: StatusCode) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(search.map(str::to_string), FakeResponse::Status(status));
        self
    }

    /// Let `count` pending (or future) requests through the gate
    pub fn release(&self, count: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(count);
        }
    }

    /// Search parameters of every request received so far, in order
    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MovieSource for FakeMovieSource {
    async fn list_movies(&self, search: Option<&str>) -> Result<Vec<Movie>, MoviesError> {
        self.calls.lock().unwrap().push(search.map(str::to_string));

        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        let response = self
            .responses
            .lock()
            .unwrap()
            .get(&search.map(str::to_string))
            .cloned();

        match response {
            Some(FakeResponse::Movies(movies)) => Ok(movies),
            Some(FakeResponse::Status(status)) => Err(MoviesError::Status(status)),
            None => Ok(Vec::new()),
        }
    }
}

/// Numbered movies `tt0000001`, `tt0000002`, ... titled "<prefix> 1", "<prefix> 2", ...
pub fn movies(prefix: &str, count: usize) -> Vec<Movie> {
    (1..=count)
        .map(|n| Movie::new(format!("tt{:07}", n), format!("{} {}", prefix, n)))
        .collect()
}
