mod dashboard_vm;

pub use dashboard_vm::{DashboardVm, PhaseRowVm, map_dashboard};
