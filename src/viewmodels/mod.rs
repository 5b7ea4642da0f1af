pub mod connectivity_viewmodel;

pub use connectivity_viewmodel::{project_status, status_view, StatusView};
