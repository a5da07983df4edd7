use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::try_join;
use postboard_api::{client::PostSource, endpoint::Endpoint};
use postboard_types::{post::Post, query::Query, state::FetchState};
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info};

use super::error::Error;

/// unfiltered_total: Size of the whole corpus, reported as the total when no
/// author filter is set. (default: 100)
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub unfiltered_total: Option<u64>,
}

impl Settings {
    const DEFAULT_UNFILTERED_TOTAL: u64 = 100;
    pub fn new(unfiltered_total: Option<u64>) -> Self {
        Settings { unfiltered_total }
    }

    pub fn unfiltered_total(&self) -> u64 {
        self.unfiltered_total.unwrap_or(Self::DEFAULT_UNFILTERED_TOTAL)
    }
}

/// Settles the state again when a fetch is dropped before it publishes.
struct InFlight<'a> {
    generation: &'a AtomicU64,
    state: &'a watch::Sender<FetchState>,
    token: u64,
    published: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.published || self.generation.load(Ordering::SeqCst) != self.token {
            return;
        }
        debug!("Generation {} abandoned before completing", self.token);
        let settled = FetchState {
            loading: false,
            ..self.state.borrow().clone()
        };
        self.state.send_replace(settled);
    }
}

/// Resolves queries into [`FetchState`]s.
///
/// Calls may overlap. Each one takes a generation number when it starts, and
/// only the newest generation is allowed to publish its result; older calls
/// finish quietly and leave the state alone.
pub struct Coordinator<S> {
    source: S,
    settings: Settings,
    generation: AtomicU64,
    last_query: Mutex<Option<Query>>,
    state: watch::Sender<FetchState>,
}

impl<S: PostSource> Coordinator<S> {
    pub fn new(source: S, settings: Option<Settings>) -> Self {
        let (state, _) = watch::channel(FetchState::default());
        Coordinator {
            source,
            settings: settings.unwrap_or_default(),
            generation: AtomicU64::new(0),
            last_query: Mutex::new(None),
            state,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    pub async fn last_query(&self) -> Option<Query> {
        *self.last_query.lock().await
    }

    /// A full fetch cycle
    /// 1. Claim a generation and mark the state as loading
    /// 2. Request the page and, when filtered, the author's full list, concurrently
    /// 3. Publish the result, unless a newer cycle started in the meantime
    pub async fn fetch(&self, query: Query) -> FetchState {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.last_query.lock().await = Some(query);
        let loading = FetchState::loading_from(&self.state.borrow());
        self.state.send_replace(loading);
        let mut in_flight = InFlight {
            generation: &self.generation,
            state: &self.state,
            token,
            published: false,
        };
        debug!(
            "Fetching page {} (size {}, user {:?}), generation {}",
            query.page(),
            query.page_size(),
            query.user().user(),
            token
        );

        let outcome = self.load(&query).await;
        if self.generation.load(Ordering::SeqCst) != token {
            debug!("Dropping stale result of generation {}", token);
            return self.state();
        }
        let next = match outcome {
            Ok((posts, total)) => {
                info!(
                    "Loaded {} posts for page {}, total {}",
                    posts.len(),
                    query.page(),
                    total
                );
                FetchState::loaded(posts, total)
            }
            Err(e) => {
                error!("Error fetching posts: {}", e);
                FetchState::failed(e.to_string())
            }
        };
        in_flight.published = true;
        self.state.send_replace(next.clone());
        next
    }

    /// Runs the last query again as-is.
    pub async fn refetch(&self) -> FetchState {
        let last = *self.last_query.lock().await;
        match last {
            Some(query) => self.fetch(query).await,
            None => {
                debug!("Nothing to refetch yet");
                self.state()
            }
        }
    }

    async fn load(&self, query: &Query) -> Result<(Vec<Post>, u64), Error> {
        let user = query.user().user();
        let page = Endpoint::Page {
            start: query.offset(),
            limit: query.page_size(),
            user,
        };
        let total = async {
            match user {
                Some(user) => self
                    .source
                    .posts(&Endpoint::UserPosts(user))
                    .await
                    .map(|posts| posts.len() as u64),
                None => Ok(self.settings.unfiltered_total()),
            }
        };
        let (posts, total) = try_join(self.source.posts(&page), total).await?;
        if posts.len() > query.page_size() as usize {
            return Err(Error::OversizedPage {
                got: posts.len(),
                limit: query.page_size(),
            });
        }
        Ok((posts, total))
    }
}
