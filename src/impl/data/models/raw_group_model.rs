use crate::entities::{BillingScheduleGroup, DiscountSchedule, FeeSchedule};

use super::{
    amount_model::{amount_or_empty, AmountModel},
    payment_method_model::PaymentMethodModel,
};

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDiscountModel {
    #[serde(default)]
    pub discount_schedule_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<AmountModel>,
    #[serde(default)]
    pub parent_fee_schedule_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawFeeItemModel {
    #[serde(default)]
    pub fee_schedule_id: Option<String>,
    #[serde(default)]
    pub fee_name: Option<String>,
    #[serde(default)]
    pub fee_amount: Option<AmountModel>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub discounts: Option<Vec<RawDiscountModel>>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawGroupModel {
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub billing_schedule_group_id: Option<String>,
    #[serde(default)]
    pub billing_schedule_group_name: Option<String>,
    #[serde(default)]
    pub next_billing_date: Option<String>,
    #[serde(default)]
    pub fee_total: Option<AmountModel>,
    #[serde(default)]
    pub discount_total: Option<AmountModel>,
    #[serde(default)]
    pub net_total: Option<AmountModel>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethodModel>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fee_items: Option<Vec<RawFeeItemModel>>,
    #[serde(default)]
    pub misc_discounts: Option<Vec<RawDiscountModel>>,
}

impl Into<DiscountSchedule> for RawDiscountModel {
    fn into(self) -> DiscountSchedule {
        DiscountSchedule {
            discount_schedule_id: self.discount_schedule_id.unwrap_or_default(),
            name: self.name,
            amount: amount_or_empty(self.amount),
            parent_fee_schedule_id: self.parent_fee_schedule_id,
            description: self.description,
        }
    }
}

impl Into<FeeSchedule> for RawFeeItemModel {
    fn into(self) -> FeeSchedule {
        FeeSchedule {
            fee_schedule_id: self.fee_schedule_id.unwrap_or_default(),
            fee_name: self.fee_name,
            fee_amount: amount_or_empty(self.fee_amount),
            description: self.description,
            discounts: self
                .discounts
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl Into<BillingScheduleGroup> for RawGroupModel {
    fn into(self) -> BillingScheduleGroup {
        BillingScheduleGroup {
            section_id: self.section_id.unwrap_or_default(),
            group_id: self.billing_schedule_group_id.unwrap_or_default(),
            group_name: self.billing_schedule_group_name,
            next_billing_date: self.next_billing_date,
            fee_total: amount_or_empty(self.fee_total),
            discount_total: amount_or_empty(self.discount_total),
            net_total: amount_or_empty(self.net_total),
            payment_method: self.payment_method.map(Into::into),
            description: self.description,
            fee_items: self
                .fee_items
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            misc_discounts: self
                .misc_discounts
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
