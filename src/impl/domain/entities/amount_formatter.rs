use super::billing_schedule_group::RawAmount;

/// Formatting seam used by the mapping logic. Implementations must be total:
/// every input yields a display string.
pub trait AmountFormatter {
    fn format_date(&self, iso_date: Option<&str>) -> Option<String>;
    fn format_amount(&self, value: &RawAmount) -> String;
}
