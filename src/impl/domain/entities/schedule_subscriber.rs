use super::{billing_schedule_group::BillingScheduleGroup, fetch_error::FetchError};

/// Push contract of the data source. The source calls these on every upstream
/// change for the subscribed account; each call runs to completion before the
/// next one.
pub trait ScheduleSubscriber {
    /// A new fetch is in flight.
    fn on_fetch_started(&mut self);

    fn on_data(&mut self, groups: Vec<BillingScheduleGroup>);

    fn on_error(&mut self, error: FetchError);

    fn deliver(&mut self, result: Result<Vec<BillingScheduleGroup>, FetchError>) {
        match result {
            Ok(groups) => self.on_data(groups),
            Err(error) => self.on_error(error),
        }
    }
}
