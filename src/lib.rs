// Library exports for integration tests and the desktop binary

pub mod config;
pub mod movies;
pub mod results;
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

// Test support (unit tests, or integration tests with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
