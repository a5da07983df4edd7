use std::fmt::{Display, Formatter};

use postboard_types::user::UserId;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Endpoint {
    Posts,
    Page {
        start: u64,
        limit: u32,
        user: Option<UserId>,
    },
    UserPosts(UserId),
}

impl Endpoint {
    pub const DEFAULT_BASE_URL: &'static str = "https://jsonplaceholder.typicode.com";

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self)
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Posts => write!(f, "/posts"),
            Self::Page { start, limit, user } => {
                write!(f, "/posts?_start={}&_limit={}", start, limit)?;
                if let Some(user) = user {
                    write!(f, "&userId={}", user)?;
                }
                Ok(())
            }
            Self::UserPosts(user) => write!(f, "/posts?userId={}", user),
        }
    }
}
