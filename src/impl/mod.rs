// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod payload_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod fetch_error_model;
        pub(crate) mod payment_method_model;
        pub(crate) mod raw_group_model;
        pub(crate) mod view_config_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod schedule_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod amount_formatter;
        pub(crate) mod billing_schedule_group;
        pub(crate) mod display_group;
        pub(crate) mod fetch_error;
        pub(crate) mod navigation;
        pub(crate) mod payment_method_view;
        pub(crate) mod schedule_subscriber;
        pub(crate) mod view_config;
        pub(crate) mod view_state;
    }
    pub(crate) mod logic {
        pub(crate) mod error_normalizer;
        pub(crate) mod group_mapper;
        pub(crate) mod paginator;
        pub(crate) mod payment_method_mapper;
        pub(crate) mod row_flattener;
    }
    pub(crate) mod repositories {
        pub(crate) mod schedule_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod map_groups_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod formatter;
    pub(crate) mod locale_provider;
    pub(crate) mod utils;
    pub(crate) mod view_controller;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::amount_formatter::*;
        pub use crate::domain::entities::billing_schedule_group::*;
        pub use crate::domain::entities::display_group::*;
        pub use crate::domain::entities::fetch_error::*;
        pub use crate::domain::entities::navigation::*;
        pub use crate::domain::entities::payment_method_view::*;
        pub use crate::domain::entities::schedule_subscriber::*;
        pub use crate::domain::entities::view_config::*;
        pub use crate::domain::entities::view_state::*;
    }

    pub mod view {
        pub use crate::presentation::formatter::*;
        pub use crate::presentation::locale_provider::{
            FixedLocaleProvider, LocaleProvider, SystemLocaleProvider,
        };
        pub use crate::presentation::view_controller::*;
    }
}
