use super::display_group::DisplayGroup;

/// Number of groups shown per page. Not configurable.
pub const PAGE_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    First,
    Previous,
    Next,
    Last,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage {
    /// Full result set, in payload order.
    pub groups: Vec<DisplayGroup>,
    /// Slice of `groups` for `current_page`.
    pub page_groups: Vec<DisplayGroup>,
    /// Always within `[1, total_pages]`.
    pub current_page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Loaded(LoadedPage),
    Errored(String),
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Errored(message) => Some(message),
            _ => None,
        }
    }

    pub fn groups(&self) -> &[DisplayGroup] {
        match self {
            ViewState::Loaded(page) => &page.groups,
            _ => &[],
        }
    }

    pub fn page_groups(&self) -> &[DisplayGroup] {
        match self {
            ViewState::Loaded(page) => &page.page_groups,
            _ => &[],
        }
    }

    /// Loading and Errored both sit on page 1.
    pub fn current_page(&self) -> usize {
        match self {
            ViewState::Loaded(page) => page.current_page,
            _ => 1,
        }
    }
}
