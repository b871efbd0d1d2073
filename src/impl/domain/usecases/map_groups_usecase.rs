use crate::{
    domain::logic::group_mapper::GroupMapper,
    entities::{AmountFormatter, BillingScheduleGroup, DisplayGroup},
};

pub trait MapGroupsUsecase {
    /// Maps every raw group, preserving payload order.
    fn map_groups<F: AmountFormatter>(
        &self,
        groups: &[BillingScheduleGroup],
        formatter: &F,
    ) -> Vec<DisplayGroup>;
}

pub(crate) struct MapGroupsUsecaseImpl;

impl MapGroupsUsecase for MapGroupsUsecaseImpl {
    fn map_groups<F: AmountFormatter>(
        &self,
        groups: &[BillingScheduleGroup],
        formatter: &F,
    ) -> Vec<DisplayGroup> {
        let mapper = GroupMapper::new(formatter);
        groups.iter().map(|g| mapper.map(g)).collect()
    }
}

impl MapGroupsUsecaseImpl {
    pub(crate) fn new() -> Self {
        MapGroupsUsecaseImpl
    }
}
