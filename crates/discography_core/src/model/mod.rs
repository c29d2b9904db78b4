//! Domain model for albums, singers and their joined read view.
//!
//! # Responsibility
//! - Define the records persisted by album/singer stores.
//! - Define the ephemeral `ExtendAlbum` projection built by services.
//!
//! # Invariants
//! - `AlbumId` and `SingerId` are distinct types; an album references its
//!   singer only through `SingerId`.
//! - `ExtendAlbum` is never persisted.

pub mod album;
pub mod extend_album;
pub mod singer;
