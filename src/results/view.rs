use crate::movies::MovieSource;
use crate::results::state::{FetchKind, ResultsConfig, SearchPolicy, ViewState};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

type Ticket = u64;

/// Bookkeeping for fetches issued by one view
#[derive(Default)]
struct Requests {
    started: bool,
    stopped: bool,
    /// Ticket of the most recently issued fetch; only it may commit
    latest: Ticket,
    in_flight: HashMap<Ticket, JoinHandle<()>>,
}

struct Inner {
    source: Arc<dyn MovieSource>,
    config: ResultsConfig,
    runtime: Handle,
    state_tx: watch::Sender<ViewState>,
    requests: Mutex<Requests>,
}

/// Owns the results page state and the fetches that feed it
///
/// `start` and `stop` bracket the page's lifetime. Fetches run on the given
/// runtime; their outcomes reach `ViewState` through a single commit gate, so
/// nothing lands after `stop` and a superseded fetch never overwrites a newer
/// one. UI code follows the state through `subscribe`.
#[derive(Clone)]
pub struct ResultsView {
    inner: Arc<Inner>,
}

impl ResultsView {
    pub fn new(source: Arc<dyn MovieSource>, config: ResultsConfig, runtime: Handle) -> Self {
        let (state_tx, _) = watch::channel(ViewState::initial());
        Self {
            inner: Arc::new(Inner {
                source,
                config,
                runtime,
                state_tx,
                requests: Mutex::new(Requests::default()),
            }),
        }
    }

    /// Issue the initial (unfiltered) fetch. Only the first call does anything.
    pub fn start(&self) {
        let mut requests = self.inner.lock_requests();
        if requests.stopped || requests.started {
            debug!("Results view already started or stopped, ignoring start");
            return;
        }
        requests.started = true;

        info!("Loading movies");
        self.inner.issue(&mut requests, FetchKind::Initial, None);
    }

    /// Cancel everything in flight and freeze the state
    pub fn stop(&self) {
        let mut requests = self.inner.lock_requests();
        if requests.stopped {
            return;
        }
        requests.stopped = true;

        let cancelled = requests.in_flight.len();
        for (_, task) in requests.in_flight.drain() {
            task.abort();
        }
        info!("Results view stopped, {} request(s) cancelled", cancelled);
    }

    /// Search for `term`, sent to the server as-is (empty included).
    ///
    /// Returns false when the search was not issued: the view is stopped, or
    /// the policy is `FirstInFlightBlocksNew` and another fetch is pending.
    pub fn search(&self, term: impl Into<String>) -> bool {
        let term = term.into();
        let mut requests = self.inner.lock_requests();
        if requests.stopped {
            debug!("Results view stopped, ignoring search for {:?}", term);
            return false;
        }

        requests.in_flight.retain(|_, task| !task.is_finished());
        if !requests.in_flight.is_empty() {
            match self.inner.config.search_policy {
                SearchPolicy::FirstInFlightBlocksNew => {
                    info!("Search for {:?} ignored, a request is still pending", term);
                    return false;
                }
                SearchPolicy::LatestWins => {
                    for (ticket, task) in requests.in_flight.drain() {
                        debug!("Request #{} superseded, cancelling", ticket);
                        task.abort();
                    }
                }
            }
        }

        self.inner
            .state_tx
            .send_modify(|state| state.searching = true);

        info!("🔍 Searching movies for {:?}", term);
        self.inner
            .issue(&mut requests, FetchKind::Search, Some(term));
        true
    }

    /// Search for whatever is currently in the search box
    pub fn submit_search(&self) -> bool {
        let term = self.inner.state_tx.borrow().query.clone();
        self.search(term)
    }

    /// Store the search box contents. Never fetches.
    pub fn update_query(&self, value: impl Into<String>) {
        let value = value.into();
        let requests = self.inner.lock_requests();
        if requests.stopped {
            return;
        }
        self.inner.state_tx.send_modify(|state| state.query = value);
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.inner.state_tx.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.inner.state_tx.borrow().clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.inner.lock_requests().stopped
    }
}

impl Inner {
    fn lock_requests(&self) -> MutexGuard<'_, Requests> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn issue(self: &Arc<Self>, requests: &mut Requests, kind: FetchKind, search: Option<String>) {
        requests.latest += 1;
        let ticket = requests.latest;

        let inner = Arc::clone(self);
        let task = self.runtime.spawn(async move {
            inner.fetch(ticket, kind, search).await;
        });
        requests.in_flight.insert(ticket, task);
    }

    async fn fetch(self: Arc<Self>, ticket: Ticket, kind: FetchKind, search: Option<String>) {
        match self.source.list_movies(search.as_deref()).await {
            Ok(movies) => {
                debug!("Request #{} returned {} movie(s)", ticket, movies.len());

                let delay = self.config.display_delay;
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }

                self.commit(ticket, |state| {
                    state.movies = movies;
                    state.loading = false;
                    if kind == FetchKind::Search {
                        state.searching = false;
                    }
                });
            }
            Err(e) => {
                warn!("✗ {:?} request #{} failed: {}", kind, ticket, e);

                self.commit(ticket, |state| {
                    state.error_message = Some(kind.failure_message().to_string());
                    state.loading = false;
                    if kind == FetchKind::Search {
                        state.searching = false;
                    }
                });
            }
        }
    }

    fn commit(&self, ticket: Ticket, apply: impl FnOnce(&mut ViewState)) -> bool {
        let mut requests = self.lock_requests();
        requests.in_flight.remove(&ticket);

        if requests.stopped {
            debug!("Request #{} settled after stop, discarding", ticket);
            return false;
        }
        if ticket != requests.latest {
            debug!(
                "Request #{} superseded by #{}, discarding",
                ticket, requests.latest
            );
            return false;
        }

        self.state_tx.send_modify(apply);
        true
    }
}
