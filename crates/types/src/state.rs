use crate::post::Post;

/// Snapshot of the coordinator's output. Every transition builds a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    pub posts: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
    pub total: u64,
}

impl FetchState {
    /// Keeps the previous data on screen while a request is in flight.
    pub fn loading_from(prev: &FetchState) -> Self {
        FetchState {
            posts: prev.posts.clone(),
            loading: true,
            error: None,
            total: prev.total,
        }
    }

    pub fn loaded(posts: Vec<Post>, total: u64) -> Self {
        FetchState {
            posts,
            loading: false,
            error: None,
            total,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        FetchState {
            posts: vec![],
            loading: false,
            error: Some(message.into()),
            total: 0,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Settled without error and nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.posts.is_empty()
    }
}
