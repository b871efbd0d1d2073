/// Amount as delivered by the server. The upstream source mixes JSON numbers
/// and numeric strings, so the original representation is kept until
/// formatting time.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscountSchedule {
    pub discount_schedule_id: String,
    pub name: Option<String>,
    /// Always non-negative as supplied. The sign is applied at display time.
    pub amount: RawAmount,
    pub parent_fee_schedule_id: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeeSchedule {
    pub fee_schedule_id: String,
    pub fee_name: Option<String>,
    pub fee_amount: RawAmount,
    pub description: Option<String>,
    pub discounts: Vec<DiscountSchedule>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethod {
    pub display_type: Option<String>,
    pub nickname: Option<String>,
    pub card_type: Option<String>,
    pub ending_in: Option<String>,
    pub expiration: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillingScheduleGroup {
    pub section_id: String,
    pub group_id: String,
    pub group_name: Option<String>,
    /// ISO date string (`YYYY-MM-DD`, possibly followed by a time part).
    pub next_billing_date: Option<String>,
    pub fee_total: RawAmount,
    pub discount_total: RawAmount,
    pub net_total: RawAmount,
    pub payment_method: Option<PaymentMethod>,
    pub description: Option<String>,
    pub fee_items: Vec<FeeSchedule>,
    /// Discounts not attributed to any fee.
    pub misc_discounts: Vec<DiscountSchedule>,
}

// --

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl std::fmt::Display for RawAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawAmount::Number(n) => write!(f, "{}", n),
            RawAmount::Text(s) => write!(f, "{}", s),
        }
    }
}
