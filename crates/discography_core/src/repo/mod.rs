//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the album/singer storage capabilities consumed by services.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`AlbumNotFound`,
//!   `SingerNotFound`, `Duplicate`) in addition to DB transport errors.
//! - SQLite repositories only accept connections bootstrapped by `db::open_*`.

pub mod album_repo;
pub mod error;
pub mod singer_repo;

mod schema;
