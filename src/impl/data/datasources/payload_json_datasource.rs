use std::fs;

use fractic_server_error::ServerError;

use crate::{
    data::models::{fetch_error_model::FetchErrorModel, raw_group_model::RawGroupModel},
    errors::{InvalidPayloadJson, ReadError},
};

pub(crate) trait PayloadJsonDatasource {
    fn groups_from_string(&self, s: &str) -> Result<Vec<RawGroupModel>, ServerError>;

    fn groups_from_file<P>(&self, path: P) -> Result<Vec<RawGroupModel>, ServerError>
    where
        P: AsRef<std::path::Path>;

    /// Never fails: text that is not a recognizable error object yields an
    /// empty model.
    fn fetch_error_from_string(&self, s: &str) -> FetchErrorModel;
}

pub(crate) struct PayloadJsonDatasourceImpl;

impl PayloadJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl PayloadJsonDatasource for PayloadJsonDatasourceImpl {
    fn groups_from_string(&self, s: &str) -> Result<Vec<RawGroupModel>, ServerError> {
        // A null payload means the source has no groups for the account.
        let groups: Option<Vec<RawGroupModel>> =
            serde_json::from_str(s).map_err(|e| InvalidPayloadJson::with_debug(&e))?;
        Ok(groups.unwrap_or_default())
    }

    fn groups_from_file<P>(&self, path: P) -> Result<Vec<RawGroupModel>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.groups_from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }

    fn fetch_error_from_string(&self, s: &str) -> FetchErrorModel {
        serde_json::from_str(s).unwrap_or_default()
    }
}
