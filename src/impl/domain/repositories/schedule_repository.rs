use fractic_server_error::ServerError;

use crate::entities::{BillingScheduleGroup, FetchError};

pub trait ScheduleRepository {
    fn groups_from_string(&self, payload_json: &str)
        -> Result<Vec<BillingScheduleGroup>, ServerError>;

    fn groups_from_file<P>(&self, payload_json: P) -> Result<Vec<BillingScheduleGroup>, ServerError>
    where
        P: AsRef<std::path::Path>;

    fn fetch_error_from_string(&self, error_json: &str) -> FetchError;
}
