pub mod api_client;
pub mod auth_probe;
pub mod auth_service;

pub use api_client::{HttpResponse, HttpTransport};
#[cfg(target_arch = "wasm32")]
pub use api_client::BrowserTransport;
pub use auth_probe::{run_auth_probe, AuthProbeReport};
pub use auth_service::SessionBootstrap;
