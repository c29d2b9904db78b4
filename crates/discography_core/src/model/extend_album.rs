//! Album read view joined with its resolved singer.
//!
//! # Responsibility
//! - Define the `ExtendAlbum` response shape.
//! - Provide the pure join used by album services.
//!
//! # Invariants
//! - `convert_extend` has no side effects and cannot fail.
//! - The embedded singer is whatever the caller passed; the join does not
//!   compare it with `Album::singer_id`.

use crate::model::album::{Album, AlbumId};
use crate::model::singer::Singer;
use serde::{Deserialize, Serialize};

/// Album enriched with the full singer record.
///
/// Serialized as `{"id", "title", "singer"}` with `singer` as a nested object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendAlbum {
    pub id: AlbumId,
    pub title: String,
    pub singer: Singer,
}

/// Joins an album with its singer into a fresh `ExtendAlbum`.
pub fn convert_extend(album: Album, singer: Singer) -> ExtendAlbum {
    ExtendAlbum {
        id: album.id,
        title: album.title,
        singer,
    }
}
