pub mod forms;
pub mod dashboard_viewmodel;
pub mod tracking_viewmodel;

pub use forms::{LoginForm, RegisterForm, ShipmentForm};
pub use dashboard_viewmodel::{row_cells, DashboardPermissions, DashboardViewModel, ShipmentScope, TABLE_COLUMNS};
pub use tracking_viewmodel::{HistoryLine, TrackingDetails, TrackingViewModel};
