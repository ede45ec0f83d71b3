//! Account service: in-memory Account registry behind a REST API.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use model::{Account, AccountFields};
pub use routes::{account_routes, app, app_with_body_limit, common_routes};
pub use service::AccountService;
pub use state::AppState;
pub use store::AccountStore;
