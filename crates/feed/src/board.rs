use postboard_api::client::PostSource;
use postboard_types::{
    query::Query,
    state::FetchState,
    user::{UserFilter, UserId},
};
use tracing::{debug, info};

use super::{
    coordinator::Coordinator,
    error::Error,
    filter::FilterControl,
    pagination::Pagination,
};

/// Whatever displays the list; only needs to be told to jump back to the top.
pub trait Viewport {
    fn scroll_to_top(&self);
}

impl Viewport for () {
    fn scroll_to_top(&self) {}
}

/// Owns the current page and author filter and keeps the list in step with them.
pub struct Board<S, V = ()> {
    coordinator: Coordinator<S>,
    viewport: V,
    filter: FilterControl,
    current_page: u32,
    user_filter: UserFilter,
    page_size: u32,
}

impl<S: PostSource> Board<S> {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    pub fn new(coordinator: Coordinator<S>) -> Self {
        Board {
            coordinator,
            viewport: (),
            filter: FilterControl::default(),
            current_page: 1,
            user_filter: UserFilter::All,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

impl<S: PostSource, V: Viewport> Board<S, V> {
    pub fn with_viewport<W: Viewport>(self, viewport: W) -> Board<S, W> {
        Board {
            coordinator: self.coordinator,
            viewport,
            filter: self.filter,
            current_page: self.current_page,
            user_filter: self.user_filter,
            page_size: self.page_size,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Result<Self, Error> {
        Query::new(self.current_page, page_size, self.user_filter)?;
        self.page_size = page_size;
        Ok(self)
    }

    pub fn coordinator(&self) -> &Coordinator<S> {
        &self.coordinator
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn filter(&self) -> &FilterControl {
        &self.filter
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn user_filter(&self) -> UserFilter {
        self.user_filter
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn query(&self) -> Result<Query, Error> {
        Ok(Query::new(self.current_page, self.page_size, self.user_filter)?)
    }

    pub fn state(&self) -> FetchState {
        self.coordinator.state()
    }

    pub fn pagination(&self) -> Option<Pagination> {
        Pagination::new(self.current_page, self.state().total, self.page_size)
    }

    pub async fn load(&self) -> Result<FetchState, Error> {
        Ok(self.coordinator.fetch(self.query()?).await)
    }

    /// A new filter always starts over from the first page.
    pub async fn change_filter(&mut self, filter: UserFilter) -> Result<FetchState, Error> {
        let query = self.query()?.with_user(filter);
        info!("Filter changed to {:?}", filter.user());
        self.user_filter = query.user();
        self.current_page = query.page();
        self.filter.sync(filter);
        Ok(self.coordinator.fetch(query).await)
    }

    /// Typed filter text; refetches only when the text is a usable filter.
    pub async fn input_filter(&mut self, value: &str) -> Result<Option<FetchState>, Error> {
        match self.filter.input(value) {
            Some(filter) => self.change_filter(filter).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn quick_select(&mut self, user: UserId) -> Result<FetchState, Error> {
        let filter = self.filter.quick_select(user);
        self.change_filter(filter).await
    }

    pub async fn clear_filter(&mut self) -> Result<FetchState, Error> {
        let filter = self.filter.clear();
        self.change_filter(filter).await
    }

    pub async fn change_page(&mut self, page: u32) -> Result<FetchState, Error> {
        let query = self.query()?.with_page(page)?;
        info!("Page changed to {}", page);
        self.current_page = query.page();
        self.viewport.scroll_to_top();
        Ok(self.coordinator.fetch(query).await)
    }

    /// Same query again. Ignored while a fetch is still running.
    pub async fn refresh(&self) -> FetchState {
        if self.coordinator.is_loading() {
            debug!("Refresh ignored, fetch in flight");
            return self.coordinator.state();
        }
        self.coordinator.refetch().await
    }
}
