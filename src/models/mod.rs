pub mod auth;
pub mod connectivity;

pub use auth::{Organization, SessionRecord, StoredUser};
pub use connectivity::{ConnectivitySignals, ConnectivityStatus, StatusPresentation};
