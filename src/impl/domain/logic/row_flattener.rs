use crate::entities::{DetailRow, FormattedDiscount, FormattedFeeItem, RowKind};

/// Placeholder for any missing text cell.
pub(crate) const EMPTY_CELL: &str = "—";

pub(crate) struct RowFlattener;

impl RowFlattener {
    /// Emits each fee row followed by its discount rows, in input order, then
    /// the misc discount rows. Every input item yields exactly one row.
    pub(crate) fn flatten(
        fee_items: &[FormattedFeeItem],
        misc_discounts: &[FormattedDiscount],
    ) -> Vec<DetailRow> {
        let mut rows = Vec::with_capacity(
            fee_items.len()
                + fee_items.iter().map(|f| f.discounts.len()).sum::<usize>()
                + misc_discounts.len(),
        );
        for fee in fee_items {
            rows.push(DetailRow {
                id: format!("fee-{}", fee.fee_schedule_id),
                description: first_text(&[&fee.description, &fee.fee_name]),
                kind: RowKind::Fee,
                amount: fee.amount.clone(),
                record_id: fee.fee_schedule_id.clone(),
            });
            rows.extend(
                fee.discounts
                    .iter()
                    .map(|d| Self::discount_row(format!("disc-{}", d.discount_schedule_id), d)),
            );
        }
        rows.extend(
            misc_discounts
                .iter()
                .map(|d| Self::discount_row(format!("disc-misc-{}", d.discount_schedule_id), d)),
        );
        rows
    }

    fn discount_row(id: String, discount: &FormattedDiscount) -> DetailRow {
        DetailRow {
            id,
            description: first_text(&[&discount.description, &discount.name]),
            kind: RowKind::Discount,
            // Always negated for display, whatever the source sign.
            amount: format!("-{}", discount.amount),
            record_id: discount.discount_schedule_id.clone(),
        }
    }
}

/// First present, non-empty text, else the em-dash placeholder.
fn first_text(candidates: &[&Option<String>]) -> String {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|s| !s.is_empty())
        .unwrap_or(EMPTY_CELL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discount(id: &str, description: Option<&str>, name: Option<&str>) -> FormattedDiscount {
        FormattedDiscount {
            discount_schedule_id: id.into(),
            name: name.map(Into::into),
            description: description.map(Into::into),
            amount: "$5.00".into(),
        }
    }

    fn fee(id: &str, discounts: Vec<FormattedDiscount>) -> FormattedFeeItem {
        FormattedFeeItem {
            fee_schedule_id: id.into(),
            fee_name: Some(format!("Fee {}", id)),
            description: None,
            amount: "$100.00".into(),
            discounts,
        }
    }

    #[test]
    fn orders_fee_then_its_discounts_then_misc() {
        let fees = vec![
            fee("f1", vec![discount("d1", None, Some("A")), discount("d2", None, Some("B"))]),
            fee("f2", vec![]),
            fee("f3", vec![discount("d3", None, Some("C"))]),
        ];
        let misc = vec![discount("m1", None, Some("M1")), discount("m2", None, Some("M2"))];

        let ids: Vec<String> = RowFlattener::flatten(&fees, &misc)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "fee-f1",
                "disc-d1",
                "disc-d2",
                "fee-f2",
                "fee-f3",
                "disc-d3",
                "disc-misc-m1",
                "disc-misc-m2"
            ]
        );
    }

    #[test]
    fn row_count_matches_inputs() {
        let fees = vec![
            fee("f1", vec![discount("d1", None, None)]),
            fee("f2", vec![discount("d2", None, None), discount("d3", None, None)]),
        ];
        let misc = vec![discount("m1", None, None)];
        assert_eq!(RowFlattener::flatten(&fees, &misc).len(), 2 + 3 + 1);
        assert!(RowFlattener::flatten(&[], &[]).is_empty());
    }

    #[test]
    fn discount_amounts_are_negated() {
        let rows = RowFlattener::flatten(&[fee("f1", vec![discount("d1", None, None)])], &[]);
        assert_eq!(rows[0].kind, RowKind::Fee);
        assert_eq!(rows[0].amount, "$100.00");
        assert_eq!(rows[1].kind, RowKind::Discount);
        assert_eq!(rows[1].amount, "-$5.00");
        assert_eq!(rows[1].record_id, "d1");
    }

    #[test]
    fn descriptions_fall_back_to_name_then_placeholder() {
        let mut unnamed = fee("f1", vec![]);
        unnamed.fee_name = Some(String::new());
        let fees = vec![
            FormattedFeeItem {
                description: Some("Monthly dues".into()),
                ..fee("f0", vec![discount("d1", Some("Loyalty"), Some("L"))])
            },
            unnamed,
        ];
        let misc = vec![discount("m1", None, Some("Promo")), discount("m2", Some(""), None)];

        let descriptions: Vec<String> = RowFlattener::flatten(&fees, &misc)
            .into_iter()
            .map(|r| r.description)
            .collect();
        assert_eq!(descriptions, vec!["Monthly dues", "Loyalty", "—", "Promo", "—"]);
    }
}
