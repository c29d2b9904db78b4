//! Core domain logic for the discography backend.
//! Albums and singers are stored separately and joined by the service layer.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::album::{Album, AlbumId};
pub use model::extend_album::{convert_extend, ExtendAlbum};
pub use model::singer::{Singer, SingerId};
pub use repo::album_repo::{AlbumRepository, SqliteAlbumRepository};
pub use repo::error::{RepoError, RepoResult};
pub use repo::singer_repo::{SingerRepository, SqliteSingerRepository};
pub use service::album_service::AlbumService;
pub use service::singer_service::SingerService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
