use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// What the stand-in API answers for one search value
#[derive(Clone)]
pub enum Reply {
    Movies(Vec<Value>),
    Status(StatusCode),
    Raw(&'static str),
}

#[derive(Default)]
struct ApiState {
    replies: Mutex<HashMap<Option<String>, Reply>>,
    requests: Mutex<Vec<HashMap<String, String>>>,
}

/// Local stand-in for the movies API, serving `GET /v1/movies`
pub struct MoviesApi {
    state: Arc<ApiState>,
    base_url: String,
}

impl MoviesApi {
    pub async fn start() -> Self {
        let state = Arc::new(ApiState::default());
        let app = Router::new()
            .route("/v1/movies", get(list_movies))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            state,
            base_url: format!("http://{}", addr),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Answer requests whose `search` parameter equals `search`
    /// (`None` for requests without one)
    pub fn reply(&self, search: Option<&str>, reply: Reply) {
        self.state
            .replies
            .lock()
            .unwrap()
            .insert(search.map(str::to_string), reply);
    }

    /// Query parameters of every request received so far
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn list_movies(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let search = params.get("search").cloned();
    state.requests.lock().unwrap().push(params);

    let reply = state.replies.lock().unwrap().get(&search).cloned();
    match reply {
        Some(Reply::Movies(movies)) => Json(json!({ "data": movies })).into_response(),
        Some(Reply::Status(status)) => {
            (status, Json(json!({ "error": "unavailable" }))).into_response()
        }
        Some(Reply::Raw(body)) => body.into_response(),
        None => Json(json!({ "data": [] })).into_response(),
    }
}

pub fn movie_json(id: &str, title: &str, year: &str) -> Value {
    json!({
        "imdbID": id,
        "Title": title,
        "Year": year,
        "Type": "movie",
        "Poster": "N/A",
    })
}
