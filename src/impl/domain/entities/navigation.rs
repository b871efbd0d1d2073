use serde_derive::Serialize;

pub const RECORD_PAGE_TARGET: &str = "record-page";
pub const BILLING_SCHEDULE_OBJECT: &str = "Billing_Schedule";
pub const VIEW_ACTION: &str = "view";

/// Application-level navigation request. Serializes as
/// `{"targetKind", "recordId", "objectType", "action"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRequest {
    pub target_kind: String,
    pub record_id: String,
    pub object_type: String,
    pub action: String,
}

/// Navigation collaborator, owned by the host application.
pub trait Navigator {
    fn navigate(&mut self, request: NavigationRequest);
}

impl NavigationRequest {
    pub fn view_billing_schedule(record_id: &str) -> Self {
        Self {
            target_kind: RECORD_PAGE_TARGET.to_string(),
            record_id: record_id.to_string(),
            object_type: BILLING_SCHEDULE_OBJECT.to_string(),
            action: VIEW_ACTION.to_string(),
        }
    }
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, request: NavigationRequest) {
        (**self).navigate(request)
    }
}
