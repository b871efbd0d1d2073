use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::{
    domain::{
        logic::{error_normalizer::ErrorNormalizer, paginator::Paginator},
        usecases::map_groups_usecase::{MapGroupsUsecase as _, MapGroupsUsecaseImpl},
    },
    entities::{
        BillingScheduleGroup, DisplayGroup, FetchError, LoadedPage, NavigationRequest, Navigator,
        PageAction, ScheduleSubscriber, ViewConfig, ViewState, PAGE_SIZE,
    },
};

use super::{
    formatter::Formatter,
    locale_provider::{LocaleProvider, SystemLocaleProvider},
};

/// Owns the view state of one account's billing schedules and reacts to data
/// delivery and user actions.
///
/// Data and error arrivals replace the whole state and reset to page 1.
/// Pagination only ever re-slices the groups already mapped.
pub struct BillingScheduleViewController<N, L = SystemLocaleProvider>
where
    N: Navigator,
    L: LocaleProvider,
{
    account_id: String,
    config: ViewConfig,
    navigator: N,
    locale_provider: L,
    map_groups_usecase: MapGroupsUsecaseImpl,
    state: ViewState,
    expanded_sections: BTreeSet<String>,
}

impl<N: Navigator> BillingScheduleViewController<N, SystemLocaleProvider> {
    pub fn new(account_id: impl Into<String>, config: ViewConfig, navigator: N) -> Self {
        Self::with_locale_provider(account_id, config, navigator, SystemLocaleProvider)
    }
}

impl<N, L> BillingScheduleViewController<N, L>
where
    N: Navigator,
    L: LocaleProvider,
{
    pub fn with_locale_provider(
        account_id: impl Into<String>,
        config: ViewConfig,
        navigator: N,
        locale_provider: L,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            config,
            navigator,
            locale_provider,
            map_groups_usecase: MapGroupsUsecaseImpl::new(),
            state: ViewState::Loading,
            expanded_sections: BTreeSet::new(),
        }
    }

    // State accessors.
    // ---

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    pub fn groups(&self) -> &[DisplayGroup] {
        self.state.groups()
    }

    pub fn page_groups(&self) -> &[DisplayGroup] {
        self.state.page_groups()
    }

    pub fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn total_pages(&self) -> usize {
        Paginator::total_pages(self.state.groups().len(), PAGE_SIZE)
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page() <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page() >= self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        !self.is_first_page()
    }

    pub fn has_next(&self) -> bool {
        !self.is_last_page()
    }

    // Pagination.
    // ---

    /// Moves to another page and recomputes the displayed slice. Does nothing
    /// unless groups are loaded.
    pub fn navigate(&mut self, action: PageAction) {
        let ViewState::Loaded(page) = &mut self.state else {
            return;
        };
        let total_pages = Paginator::total_pages(page.groups.len(), page.page_size);
        let target = Paginator::navigate(page.current_page, total_pages, action);
        page.current_page = target;
        page.page_groups = Paginator::paginate(&page.groups, target, page.page_size).to_vec();
        debug!(
            account_id = %self.account_id,
            ?action,
            page = target,
            total_pages,
            "billing schedule page changed"
        );
    }

    pub fn first_page(&mut self) {
        self.navigate(PageAction::First);
    }

    pub fn previous_page(&mut self) {
        self.navigate(PageAction::Previous);
    }

    pub fn next_page(&mut self) {
        self.navigate(PageAction::Next);
    }

    pub fn last_page(&mut self) {
        self.navigate(PageAction::Last);
    }

    // Row and section interaction.
    // ---

    /// Opens the billing schedule record behind a clicked row. Rows without a
    /// record id are ignored. Returns whether navigation was requested.
    pub fn on_row_click(&mut self, record_id: Option<&str>) -> bool {
        let Some(record_id) = record_id.map(str::trim).filter(|id| !id.is_empty()) else {
            return false;
        };
        debug!(account_id = %self.account_id, record_id, "navigating to billing schedule");
        self.navigator
            .navigate(NavigationRequest::view_billing_schedule(record_id));
        true
    }

    /// Flips the accordion state of a section. Returns whether it is now
    /// expanded.
    pub fn toggle_section(&mut self, section_id: &str) -> bool {
        if self.expanded_sections.remove(section_id) {
            false
        } else {
            self.expanded_sections.insert(section_id.to_string());
            true
        }
    }

    pub fn is_section_expanded(&self, section_id: &str) -> bool {
        self.expanded_sections.contains(section_id)
    }

    /// Formatter for the current mapping pass. The locale is read now, never
    /// cached.
    fn formatter(&self) -> Formatter {
        let locale = match &self.config.locale_override {
            Some(locale) => locale.clone(),
            None => self.locale_provider.current_locale(),
        };
        Formatter::new(locale, self.config.currency.code())
    }
}

impl<N, L> ScheduleSubscriber for BillingScheduleViewController<N, L>
where
    N: Navigator,
    L: LocaleProvider,
{
    fn on_fetch_started(&mut self) {
        debug!(account_id = %self.account_id, "billing schedule fetch started");
        self.state = ViewState::Loading;
    }

    fn on_data(&mut self, groups: Vec<BillingScheduleGroup>) {
        let formatter = self.formatter();
        let groups = self.map_groups_usecase.map_groups(&groups, &formatter);
        let page_groups = Paginator::paginate(&groups, 1, PAGE_SIZE).to_vec();
        info!(
            account_id = %self.account_id,
            groups = groups.len(),
            locale = formatter.locale(),
            "billing schedule payload received"
        );
        self.expanded_sections.clear();
        self.state = ViewState::Loaded(LoadedPage {
            groups,
            page_groups,
            current_page: 1,
            page_size: PAGE_SIZE,
        });
    }

    fn on_error(&mut self, error: FetchError) {
        let message = ErrorNormalizer::normalize(&error);
        warn!(account_id = %self.account_id, %message, "billing schedule fetch failed");
        self.expanded_sections.clear();
        self.state = ViewState::Errored(message);
    }
}
