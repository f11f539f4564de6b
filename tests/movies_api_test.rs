mod support;

use crate::support::movies_api::{movie_json, Reply};
use crate::support::{tracing_init, MoviesApi};
use axum::http::StatusCode;
use cinefind::movies::{MovieSource, MoviesClient, MoviesError};

#[tokio::test]
async fn test_list_without_search_omits_parameter() {
    tracing_init();
    let api = MoviesApi::start().await;
    api.reply(
        None,
        Reply::Movies(vec![
            movie_json("tt0133093", "The Matrix", "1999"),
            movie_json("tt0083658", "Blade Runner", "1982"),
        ]),
    );

    let client = MoviesClient::new(api.base_url());
    let movies = client.list_movies(None).await.expect("list should succeed");

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, "tt0133093");
    assert_eq!(movies[1].display_title(), "Blade Runner");
    assert_eq!(movies[1].poster_url(), None);

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].get("search").is_none());
}

#[tokio::test]
async fn test_search_term_is_sent_verbatim() {
    tracing_init();
    let api = MoviesApi::start().await;
    api.reply(
        Some("the matrix & co"),
        Reply::Movies(vec![movie_json("tt0133093", "The Matrix", "1999")]),
    );

    let client = MoviesClient::new(format!("{}/", api.base_url()));
    let movies = client
        .list_movies(Some("the matrix & co"))
        .await
        .expect("search should succeed");
    assert_eq!(movies.len(), 1);

    let empty = client.list_movies(Some("")).await.expect("empty search");
    assert!(empty.is_empty());

    let requests = api.requests();
    assert_eq!(requests[0].get("search").map(String::as_str), Some("the matrix & co"));
    assert_eq!(requests[1].get("search").map(String::as_str), Some(""));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    tracing_init();
    let api = MoviesApi::start().await;
    api.reply(None, Reply::Status(StatusCode::SERVICE_UNAVAILABLE));

    let client = MoviesClient::new(api.base_url());
    match client.list_movies(None).await {
        Err(MoviesError::Status(status)) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    tracing_init();
    let api = MoviesApi::start().await;
    api.reply(None, Reply::Raw("{\"results\": []}"));

    let client = MoviesClient::new(api.base_url());
    let result = client.list_movies(None).await;
    assert!(matches!(result, Err(MoviesError::Decode(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_unreachable_server_is_a_request_error() {
    tracing_init();
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = MoviesClient::new(format!("http://{}", addr));
    let result = client.list_movies(None).await;
    assert!(matches!(result, Err(MoviesError::Request(_))), "got {:?}", result);
}
