//! Repository error taxonomy shared by album and singer stores.

use crate::db::DbError;
use crate::model::album::AlbumId;
use crate::model::singer::SingerId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by album/singer persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// No album row with the requested id.
    AlbumNotFound(AlbumId),
    /// No singer row with the requested id.
    SingerNotFound(SingerId),
    /// Insert collided with an existing primary key.
    Duplicate { entity: &'static str, id: i64 },
    Db(DbError),
    /// Connection schema version does not match this binary.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlbumNotFound(id) => write!(f, "album not found: {id}"),
            Self::SingerNotFound(id) => write!(f, "singer not found: {id}"),
            Self::Duplicate { entity, id } => write!(f, "{entity} already exists: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it with db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table missing: {table}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl RepoError {
    /// Returns whether this error belongs to the not-found family.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AlbumNotFound(_) | Self::SingerNotFound(_))
    }
}
