use crate::entities::{PaymentMethod, PaymentMethodView, BILL_TO_ACCOUNT_LABEL};

/// Discriminator value marking a group billed to the account instead of a
/// stored payment method.
pub(crate) const BILL_TO_ACCOUNT_DISPLAY_TYPE: &str = "BILL_TO_ACCOUNT";

pub(crate) struct PaymentMethodMapper;

impl PaymentMethodMapper {
    pub(crate) fn map(payment_method: Option<&PaymentMethod>) -> PaymentMethodView {
        match payment_method {
            None => Self::bill_to_account(),
            Some(pm) if pm.display_type.as_deref() == Some(BILL_TO_ACCOUNT_DISPLAY_TYPE) => {
                Self::bill_to_account()
            }
            Some(pm) => PaymentMethodView::StoredAccount {
                nickname: pm.nickname.clone(),
                card_type: pm.card_type.clone(),
                ending_in: pm.ending_in.clone(),
                expiration: pm.expiration.clone(),
            },
        }
    }

    fn bill_to_account() -> PaymentMethodView {
        PaymentMethodView::BillToAccount {
            label: BILL_TO_ACCOUNT_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment_method() -> PaymentMethod {
        PaymentMethod {
            display_type: None,
            nickname: None,
            card_type: None,
            ending_in: None,
            expiration: None,
        }
    }

    #[test]
    fn absent_method_bills_to_account() {
        assert_eq!(
            PaymentMethodMapper::map(None),
            PaymentMethodView::BillToAccount {
                label: "Bill to Account".into()
            }
        );
    }

    #[test]
    fn marker_bills_to_account_even_with_card_fields() {
        let pm = PaymentMethod {
            display_type: Some("BILL_TO_ACCOUNT".into()),
            nickname: Some("Ignored".into()),
            ..payment_method()
        };
        assert!(PaymentMethodMapper::map(Some(&pm)).is_bill_to_account());
    }

    #[test]
    fn stored_account_copies_fields_verbatim() {
        let pm = PaymentMethod {
            nickname: Some("Visa".into()),
            card_type: Some("VISA".into()),
            ending_in: Some("1234".into()),
            expiration: Some("09/27".into()),
            ..payment_method()
        };
        assert_eq!(
            PaymentMethodMapper::map(Some(&pm)),
            PaymentMethodView::StoredAccount {
                nickname: Some("Visa".into()),
                card_type: Some("VISA".into()),
                ending_in: Some("1234".into()),
                expiration: Some("09/27".into()),
            }
        );
    }

    #[test]
    fn other_display_types_are_stored_accounts() {
        let pm = PaymentMethod {
            display_type: Some("CARD".into()),
            ..payment_method()
        };
        assert!(!PaymentMethodMapper::map(Some(&pm)).is_bill_to_account());
    }
}
