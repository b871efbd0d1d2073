use fractic_server_error::ServerError;

use crate::{
    data::repositories::schedule_repository_impl::ScheduleRepositoryImpl,
    domain::{
        repositories::schedule_repository::ScheduleRepository as _,
        usecases::map_groups_usecase::{MapGroupsUsecase as _, MapGroupsUsecaseImpl},
    },
    entities::{BillingScheduleGroup, DisplayGroup, FetchError},
    presentation::formatter::Formatter,
};

/// Entry point for callers holding the server payload as JSON text rather
/// than as entities.
pub struct BillingScheduleViewUtil {
    repository: ScheduleRepositoryImpl,
    map_groups_usecase: MapGroupsUsecaseImpl,
}

impl BillingScheduleViewUtil {
    pub fn new() -> Self {
        Self {
            repository: ScheduleRepositoryImpl::new(),
            map_groups_usecase: MapGroupsUsecaseImpl::new(),
        }
    }

    pub fn groups_from_string(
        &self,
        payload_json: &str,
    ) -> Result<Vec<BillingScheduleGroup>, ServerError> {
        self.repository.groups_from_string(payload_json)
    }

    pub fn groups_from_file<P>(
        &self,
        payload_json: P,
    ) -> Result<Vec<BillingScheduleGroup>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.repository.groups_from_file(payload_json)
    }

    /// Error objects never fail to parse; unknown shapes yield an empty error
    /// that normalizes to "Unknown error".
    pub fn fetch_error_from_string(&self, error_json: &str) -> FetchError {
        self.repository.fetch_error_from_string(error_json)
    }

    pub fn display_groups_from_string(
        &self,
        payload_json: &str,
        formatter: &Formatter,
    ) -> Result<Vec<DisplayGroup>, ServerError> {
        let groups = self.repository.groups_from_string(payload_json)?;
        Ok(self.map_groups_usecase.map_groups(&groups, formatter))
    }
}

impl Default for BillingScheduleViewUtil {
    fn default() -> Self {
        Self::new()
    }
}
