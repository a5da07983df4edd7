use postboard_types::user::{UserFilter, UserId};
use tracing::debug;

/// One quick-select button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub user: UserId,
    pub active: bool,
}

/// Author filter input.
///
/// Keeps whatever text was typed, but only hands a [`UserFilter`] to the
/// caller when the text is empty or a valid author id. Anything else stays
/// local, so the owner of the query never sees an out-of-range filter.
#[derive(Debug, Clone, Default)]
pub struct FilterControl {
    input: String,
    selected: UserFilter,
}

impl FilterControl {
    pub fn new(selected: UserFilter) -> Self {
        FilterControl {
            input: selected.to_string(),
            selected,
        }
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    pub fn selected(&self) -> UserFilter {
        self.selected
    }

    /// Typed text. Returns the filter to propagate, if the text is one.
    pub fn input(&mut self, value: &str) -> Option<UserFilter> {
        self.input = value.to_string();
        match value.parse::<UserFilter>() {
            Ok(filter) => Some(filter),
            Err(e) => {
                debug!("Keeping filter input local: {}", e);
                None
            }
        }
    }

    pub fn quick_select(&mut self, user: UserId) -> UserFilter {
        self.input = user.to_string();
        UserFilter::User(user)
    }

    pub fn clear(&mut self) -> UserFilter {
        self.input.clear();
        UserFilter::All
    }

    /// Mirror the filter the owner settled on.
    pub fn sync(&mut self, selected: UserFilter) {
        self.selected = selected;
        self.input = selected.to_string();
    }

    pub fn options(&self) -> Vec<FilterOption> {
        UserId::all()
            .map(|user| FilterOption {
                user,
                active: self.selected == UserFilter::User(user),
            })
            .collect()
    }

    pub fn show_clear(&self) -> bool {
        !self.input.is_empty()
    }

    pub fn active_user(&self) -> Option<UserId> {
        self.selected.user()
    }
}
