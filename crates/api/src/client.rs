use std::{future::Future, sync::Arc, time::Duration};

use postboard_types::{post::Post, user::UserId};
use tracing::{debug, error};

use super::{endpoint::Endpoint, error::Error};

/// Configuration for the client.
/// base_url: Root of the posts API. (default: jsonplaceholder)
/// timeout_ms: Per-request timeout in milliseconds. (default: 10 seconds)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl Config {
    const DEFAULT_TIMEOUT_MS: u64 = 10_000;
    pub fn new(base_url: Option<String>, timeout_ms: Option<u64>) -> Self {
        Config {
            base_url,
            timeout_ms,
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(Endpoint::DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(Self::DEFAULT_TIMEOUT_MS))
    }
}

/// Anything that can answer an [`Endpoint`] with a list of posts.
pub trait PostSource: Send + Sync {
    fn posts(&self, endpoint: &Endpoint) -> impl Future<Output = Result<Vec<Post>, Error>> + Send;
}

impl<S: PostSource> PostSource for Arc<S> {
    async fn posts(&self, endpoint: &Endpoint) -> Result<Vec<Post>, Error> {
        (**self).posts(endpoint).await
    }
}

/// A client for the JSON posts API.
/// Build one at startup and hand it to whatever needs posts; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    cfg: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(cfg: Option<Config>) -> Result<Self, Error> {
        let cfg = cfg.unwrap_or_default();
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .default_headers(headers)
            .build()?;
        Ok(Self { cfg, http })
    }

    pub async fn get(&self, endpoint: &Endpoint) -> Result<Vec<Post>, Error> {
        let url = endpoint.url(self.cfg.base_url());
        debug!("Sending request to {}", url);
        let resp = self.http.get(&url).send().await.map_err(|e| {
            error!("request {} failed: {}", endpoint, e);
            Error::from(e)
        })?;
        self.handle_response(endpoint, resp).await
    }

    pub async fn handle_response(
        &self,
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<Vec<Post>, Error> {
        let status = resp.status();
        if !status.is_success() {
            error!("request {} status: {}", endpoint, status);
            return Err(Error::StatusCode(status.as_u16()));
        }
        let posts = resp.json::<Vec<Post>>().await.map_err(|e| {
            error!("request {} returned an unreadable body: {}", endpoint, e);
            Error::from(e)
        })?;
        debug!("request: {} status: {} posts: {}", endpoint, status, posts.len());
        Ok(posts)
    }

    /// One page of posts starting at `start`, at most `limit` long.
    pub async fn get_page(
        &self,
        start: u64,
        limit: u32,
        user: Option<UserId>,
    ) -> Result<Vec<Post>, Error> {
        let posts = self.get(&Endpoint::Page { start, limit, user }).await?;
        if posts.len() > limit as usize {
            error!("page request returned {} posts, limit was {}", posts.len(), limit);
            return Err(Error::InvalidResponse);
        }
        Ok(posts)
    }

    pub async fn get_user_posts(&self, user: UserId) -> Result<Vec<Post>, Error> {
        self.get(&Endpoint::UserPosts(user)).await
    }

    pub async fn get_all(&self) -> Result<Vec<Post>, Error> {
        self.get(&Endpoint::Posts).await
    }
}

impl PostSource for Client {
    async fn posts(&self, endpoint: &Endpoint) -> Result<Vec<Post>, Error> {
        match *endpoint {
            Endpoint::Page { start, limit, user } => self.get_page(start, limit, user).await,
            Endpoint::UserPosts(user) => self.get_user_posts(user).await,
            Endpoint::Posts => self.get_all().await,
        }
    }
}
