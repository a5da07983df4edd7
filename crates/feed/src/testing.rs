use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
    time::Duration,
};

use postboard_api::{client::PostSource, endpoint::Endpoint, error::Error};
use postboard_types::post::Post;

/// In-memory posts API: 100 posts, ten per author, like the public corpus.
#[derive(Default)]
pub struct MockSource {
    calls: Mutex<Vec<Endpoint>>,
    delays: Mutex<HashMap<Endpoint, Duration>>,
    fail: AtomicBool,
    oversized: AtomicBool,
}

impl MockSource {
    pub fn corpus() -> Vec<Post> {
        (1..=100)
            .map(|id| Post {
                id,
                user_id: (id - 1) / 10 + 1,
                title: format!("title {id}"),
                body: format!("body {id}"),
            })
            .collect()
    }

    pub fn with_delay(self, endpoint: Endpoint, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(endpoint, delay);
        self
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn set_oversized(&self, oversized: bool) {
        self.oversized.store(oversized, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl PostSource for MockSource {
    async fn posts(&self, endpoint: &Endpoint) -> Result<Vec<Post>, Error> {
        self.calls.lock().unwrap().push(*endpoint);
        let delay = self.delays.lock().unwrap().get(endpoint).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::StatusCode(503));
        }
        let posts = match *endpoint {
            Endpoint::Posts => Self::corpus(),
            Endpoint::UserPosts(user) => Self::corpus()
                .into_iter()
                .filter(|p| p.is_by(user.into()))
                .collect(),
            Endpoint::Page { start, limit, user } => {
                let limit = if self.oversized.load(Ordering::SeqCst) {
                    usize::MAX
                } else {
                    limit as usize
                };
                Self::corpus()
                    .into_iter()
                    .filter(|p| user.map_or(true, |u| p.is_by(u.into())))
                    .skip(start as usize)
                    .take(limit)
                    .collect()
            }
        };
        Ok(posts)
    }
}
