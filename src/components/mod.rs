pub mod app;
pub mod nav_bar;
pub mod toast_view;
pub mod login_screen;
pub mod register_screen;
pub mod track_shipment;
pub mod dashboard;
pub mod shipment_form_modal;
pub mod status_modal;
pub mod not_found;

pub use app::App;
pub use nav_bar::NavBar;
pub use toast_view::ToastView;
pub use login_screen::LoginScreen;
pub use register_screen::RegisterScreen;
pub use track_shipment::{ShipmentDetails, TrackShipment};
pub use dashboard::Dashboard;
pub use shipment_form_modal::ShipmentFormModal;
pub use status_modal::StatusModal;
pub use not_found::NotFound;
