pub const BILL_TO_ACCOUNT_LABEL: &str = "Bill to Account";

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentMethodView {
    BillToAccount {
        label: String,
    },
    StoredAccount {
        nickname: Option<String>,
        card_type: Option<String>,
        ending_in: Option<String>,
        expiration: Option<String>,
    },
}

impl PaymentMethodView {
    pub fn is_bill_to_account(&self) -> bool {
        matches!(self, PaymentMethodView::BillToAccount { .. })
    }
}
