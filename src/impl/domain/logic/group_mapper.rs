use crate::entities::{
    AmountFormatter, BillingScheduleGroup, DiscountSchedule, DisplayGroup, FeeSchedule,
    FormattedDiscount, FormattedFeeItem,
};

use super::{payment_method_mapper::PaymentMethodMapper, row_flattener::RowFlattener};

const HEADER_PADDING: &str = "   ";

pub(crate) struct GroupMapper<'a, F: AmountFormatter> {
    formatter: &'a F,
}

impl<'a, F: AmountFormatter> GroupMapper<'a, F> {
    pub(crate) fn new(formatter: &'a F) -> Self {
        Self { formatter }
    }

    /// Builds the display group. Each field is formatted on its own, so a
    /// value that fails to parse only affects its own cell.
    pub(crate) fn map(&self, group: &BillingScheduleGroup) -> DisplayGroup {
        let fee_total = self.formatter.format_amount(&group.fee_total);
        let discount_total = self.formatter.format_amount(&group.discount_total);

        let fee_items: Vec<FormattedFeeItem> =
            group.fee_items.iter().map(|f| self.format_fee(f)).collect();
        let misc_discounts: Vec<FormattedDiscount> = group
            .misc_discounts
            .iter()
            .map(|d| self.format_discount(d))
            .collect();

        DisplayGroup {
            section_id: group.section_id.clone(),
            group_id: group.group_id.clone(),
            name: group.group_name.clone(),
            next_billing_date: self
                .formatter
                .format_date(group.next_billing_date.as_deref()),
            net_total: self.formatter.format_amount(&group.net_total),
            payment_method: PaymentMethodMapper::map(group.payment_method.as_ref()),
            description: group.description.clone(),
            rows: RowFlattener::flatten(&fee_items, &misc_discounts),
            header_label: header_label(&fee_total, &discount_total),
            fee_total,
            discount_total,
        }
    }

    fn format_fee(&self, fee: &FeeSchedule) -> FormattedFeeItem {
        FormattedFeeItem {
            fee_schedule_id: fee.fee_schedule_id.clone(),
            fee_name: fee.fee_name.clone(),
            description: fee.description.clone(),
            amount: self.formatter.format_amount(&fee.fee_amount),
            discounts: fee
                .discounts
                .iter()
                .map(|d| self.format_discount(d))
                .collect(),
        }
    }

    fn format_discount(&self, discount: &DiscountSchedule) -> FormattedDiscount {
        FormattedDiscount {
            discount_schedule_id: discount.discount_schedule_id.clone(),
            name: discount.name.clone(),
            description: discount.description.clone(),
            amount: self.formatter.format_amount(&discount.amount),
        }
    }
}

/// Accordion header, e.g. `Total Fees   $100.00   ·   Total Discounts   $10.00`.
pub(crate) fn header_label(fee_total: &str, discount_total: &str) -> String {
    format!(
        "Total Fees{pad}{fee_total}{pad}·{pad}Total Discounts{pad}{discount_total}",
        pad = HEADER_PADDING,
    )
}
