use fractic_server_error::ServerError;

use crate::{
    data::datasources::payload_json_datasource::{
        PayloadJsonDatasource, PayloadJsonDatasourceImpl,
    },
    domain::repositories::schedule_repository::ScheduleRepository,
    entities::{BillingScheduleGroup, FetchError},
};

pub(crate) struct ScheduleRepositoryImpl<DS = PayloadJsonDatasourceImpl>
where
    DS: PayloadJsonDatasource,
{
    payload_datasource: DS,
}

impl<DS> ScheduleRepository for ScheduleRepositoryImpl<DS>
where
    DS: PayloadJsonDatasource,
{
    fn groups_from_string(
        &self,
        payload_json: &str,
    ) -> Result<Vec<BillingScheduleGroup>, ServerError> {
        Ok(self
            .payload_datasource
            .groups_from_string(payload_json)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    fn groups_from_file<P>(&self, payload_json: P) -> Result<Vec<BillingScheduleGroup>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(self
            .payload_datasource
            .groups_from_file(payload_json)?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    fn fetch_error_from_string(&self, error_json: &str) -> FetchError {
        self.payload_datasource
            .fetch_error_from_string(error_json)
            .into()
    }
}

impl ScheduleRepositoryImpl<PayloadJsonDatasourceImpl> {
    pub(crate) fn new() -> Self {
        ScheduleRepositoryImpl {
            payload_datasource: PayloadJsonDatasourceImpl::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{FetchErrorBody, RawAmount};

    #[test]
    fn missing_fields_become_empty_values() -> Result<(), ServerError> {
        let json = r#"[{ "billingScheduleGroupId": "g1", "feeItems": [{ "feeScheduleId": "f1" }] }]"#;
        let groups = ScheduleRepositoryImpl::new().groups_from_string(json)?;
        assert_eq!(groups[0].group_id, "g1");
        assert_eq!(groups[0].section_id, "");
        assert_eq!(groups[0].net_total, RawAmount::Text(String::new()));
        assert_eq!(groups[0].fee_items[0].fee_amount, RawAmount::Text(String::new()));
        assert!(groups[0].fee_items[0].discounts.is_empty());
        assert!(groups[0].payment_method.is_none());
        Ok(())
    }

    #[test]
    fn converts_each_error_shape() {
        let repository = ScheduleRepositoryImpl::new();

        let many =
            repository.fetch_error_from_string(r#"{"body":[{"message":"A"},{"message":"B"}]}"#);
        assert!(matches!(many.body, Some(FetchErrorBody::Many(ref d)) if d.len() == 2));

        let single = repository.fetch_error_from_string(r#"{"body":{"message":"C"}}"#);
        assert!(matches!(single.body, Some(FetchErrorBody::Single(_))));

        let status =
            repository.fetch_error_from_string(r#"{"statusText":"Service Unavailable"}"#);
        assert_eq!(status.status_text.as_deref(), Some("Service Unavailable"));

        let odd = repository.fetch_error_from_string(r#"{"body":"plain text"}"#);
        assert_eq!(odd, FetchError::default());
    }
}
