use super::payment_method_view::PaymentMethodView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Fee,
    Discount,
}

/// One flattened line of a group's detail table.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    /// Unique within the owning group (`fee-<id>`, `disc-<id>`,
    /// `disc-misc-<id>`).
    pub id: String,
    pub description: String,
    pub kind: RowKind,
    pub amount: String,
    /// Billing schedule record the row navigates to when clicked.
    pub record_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayGroup {
    pub section_id: String,
    pub group_id: String,
    pub name: Option<String>,
    pub next_billing_date: Option<String>,
    pub fee_total: String,
    pub discount_total: String,
    pub net_total: String,
    pub payment_method: PaymentMethodView,
    pub description: Option<String>,
    /// Fee rows each followed by their discount rows, misc discounts last.
    pub rows: Vec<DetailRow>,
    pub header_label: String,
}

// Intermediate structures: per-item amounts already formatted, ready to be
// flattened into rows.
// ---

#[derive(Debug, Clone)]
pub struct FormattedDiscount {
    pub discount_schedule_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub amount: String,
}

#[derive(Debug, Clone)]
pub struct FormattedFeeItem {
    pub fee_schedule_id: String,
    pub fee_name: Option<String>,
    pub description: Option<String>,
    pub amount: String,
    pub discounts: Vec<FormattedDiscount>,
}

impl RowKind {
    pub fn label(&self) -> &'static str {
        match self {
            RowKind::Fee => "Fee",
            RowKind::Discount => "Discount",
        }
    }
}
