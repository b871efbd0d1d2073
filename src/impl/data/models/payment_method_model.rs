use crate::entities::PaymentMethod;

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentMethodModel {
    #[serde(default)]
    pub display_type: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub ending_in: Option<String>,
    #[serde(default)]
    pub expiration: Option<String>,
}

impl Into<PaymentMethod> for PaymentMethodModel {
    fn into(self) -> PaymentMethod {
        PaymentMethod {
            display_type: self.display_type,
            nickname: self.nickname,
            card_type: self.card_type,
            ending_in: self.ending_in,
            expiration: self.expiration,
        }
    }
}
