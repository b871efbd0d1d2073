use crate::entities::RawAmount;

/// Amounts arrive either as JSON numbers or as numeric strings.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(untagged)]
pub(crate) enum AmountModel {
    Number(f64),
    Text(String),
}

impl Into<RawAmount> for AmountModel {
    fn into(self) -> RawAmount {
        match self {
            AmountModel::Number(n) => RawAmount::Number(n),
            AmountModel::Text(s) => RawAmount::Text(s),
        }
    }
}

/// Missing amounts pass through formatting as an empty string.
pub(crate) fn amount_or_empty(amount: Option<AmountModel>) -> RawAmount {
    amount
        .map(Into::into)
        .unwrap_or_else(|| RawAmount::Text(String::new()))
}
