//! Professor service: REST CRUD over a single PostgreSQL table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{ApiSettings, Config, DatabaseConfig};
pub use error::{AppError, ConfigError};
pub use model::{CreateProfessorRequest, Professor};
pub use routes::{app, common_routes_with_ready, professor_routes};
pub use state::AppState;
pub use store::{PgProfessorStore, ProfessorStore, StoreError};
