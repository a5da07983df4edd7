use crate::user::UserFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuery {
    #[error("Page numbers start at 1")]
    ZeroPage,

    #[error("Page size must be positive")]
    ZeroPageSize,
}

/// What to fetch: one page of posts, optionally limited to one author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Query {
    page: u32,
    page_size: u32,
    user: UserFilter,
}

impl Query {
    pub fn new(page: u32, page_size: u32, user: UserFilter) -> Result<Self, InvalidQuery> {
        if page == 0 {
            return Err(InvalidQuery::ZeroPage);
        }
        if page_size == 0 {
            return Err(InvalidQuery::ZeroPageSize);
        }
        Ok(Query {
            page,
            page_size,
            user,
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn user(&self) -> UserFilter {
        self.user
    }

    /// Index of the first post on this page.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64
    }

    pub fn with_page(self, page: u32) -> Result<Self, InvalidQuery> {
        Self::new(page, self.page_size, self.user)
    }

    /// Same page size, new author filter, back on the first page.
    pub fn with_user(self, user: UserFilter) -> Self {
        Query {
            page: 1,
            page_size: self.page_size,
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserId;

    #[test]
    fn test_rejects_zero() {
        assert_eq!(Query::new(0, 10, UserFilter::All), Err(InvalidQuery::ZeroPage));
        assert_eq!(Query::new(1, 0, UserFilter::All), Err(InvalidQuery::ZeroPageSize));
    }

    #[test]
    fn test_offset() {
        assert_eq!(Query::new(1, 10, UserFilter::All).unwrap().offset(), 0);
        assert_eq!(Query::new(2, 10, UserFilter::All).unwrap().offset(), 10);
        assert_eq!(Query::new(5, 7, UserFilter::All).unwrap().offset(), 28);
        let far = Query::new(u32::MAX, u32::MAX, UserFilter::All).unwrap();
        assert_eq!(far.offset(), (u32::MAX as u64 - 1) * u32::MAX as u64);
    }

    #[test]
    fn test_with_user_resets_page() {
        let query = Query::new(4, 10, UserFilter::All).unwrap();
        let filtered = query.with_user(UserFilter::User(UserId::new(2).unwrap()));
        assert_eq!(filtered.page(), 1);
        assert_eq!(filtered.page_size(), 10);
        assert!(filtered.user().is_active());
        assert_eq!(query.with_page(0), Err(InvalidQuery::ZeroPage));
    }
}
