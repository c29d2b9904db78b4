//! Album domain model.
//!
//! # Invariants
//! - `id` is assigned by the caller and owned by the album store.
//! - `singer_id` is a plain reference; nothing here checks that the singer
//!   exists.

use crate::model::singer::SingerId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier of an album row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(pub i64);

impl Display for AlbumId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AlbumId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Album record as stored by the album repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub singer_id: SingerId,
}

impl Album {
    pub fn new(
        id: impl Into<AlbumId>,
        title: impl Into<String>,
        singer_id: impl Into<SingerId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            singer_id: singer_id.into(),
        }
    }
}
