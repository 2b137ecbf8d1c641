pub mod busbar;
pub mod group;
pub mod report;

pub use busbar::{compute_busbar_load, BusbarLoadResult, BUSBAR_DEMAND_FACTOR};
pub use group::{
    aggregate_group, compute_group_load, GroupAggregates, GroupLoadInput, GroupLoadResult,
    LoadCalcError, GROUP_LOAD_FACTOR,
};
pub use report::{busbar_rows, csv_report, report_rows, ReportRow};
