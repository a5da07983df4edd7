use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Author id accepted by the user filter. Always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct UserId(u8);

impl UserId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(id: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&id).then_some(Self(id))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every known author, ascending.
    pub fn all() -> impl Iterator<Item = UserId> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUserId {
    #[error("User id out of range: {0}")]
    OutOfRange(u32),

    #[error("User id is not a number: {0:?}")]
    NotANumber(String),
}

impl TryFrom<u32> for UserId {
    type Error = InvalidUserId;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(InvalidUserId::OutOfRange(value))
    }
}

impl From<UserId> for u32 {
    fn from(id: UserId) -> Self {
        id.0 as u32
    }
}

impl FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidUserId::NotANumber(s.to_string()));
        }
        match trimmed.parse::<u32>() {
            Ok(n) => Self::try_from(n),
            // all digits but too long for u32
            Err(_) => Err(InvalidUserId::OutOfRange(u32::MAX)),
        }
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which authors' posts are listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserFilter {
    #[default]
    All,
    User(UserId),
}

impl UserFilter {
    pub fn user(&self) -> Option<UserId> {
        match self {
            Self::All => None,
            Self::User(id) => Some(*id),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

impl From<Option<UserId>> for UserFilter {
    fn from(id: Option<UserId>) -> Self {
        id.map_or(Self::All, Self::User)
    }
}

impl From<UserId> for UserFilter {
    fn from(id: UserId) -> Self {
        Self::User(id)
    }
}

/// Empty for `All`, the bare id otherwise. This is the text a filter box shows.
impl Display for UserFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => Ok(()),
            Self::User(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for UserFilter {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Ok(Self::All)
        } else {
            s.parse().map(Self::User)
        }
    }
}
