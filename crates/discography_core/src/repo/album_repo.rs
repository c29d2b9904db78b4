//! Album repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the album storage capability: list, get, add, delete.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `get_all` returns rows ordered by ascending album id.
//! - `get`/`delete` on a missing id report `RepoError::AlbumNotFound`.
//! - `add` never overwrites; an existing id reports `RepoError::Duplicate`.

use crate::model::album::{Album, AlbumId};
use crate::model::singer::SingerId;
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::schema::{ensure_connection_ready, map_insert_error};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ALBUM_SELECT_SQL: &str = "SELECT id, title, singer_id FROM albums";

/// Album storage capability consumed by `AlbumService`.
pub trait AlbumRepository {
    fn get_all(&self) -> RepoResult<Vec<Album>>;
    fn get(&self, id: AlbumId) -> RepoResult<Album>;
    fn add(&self, album: &Album) -> RepoResult<()>;
    fn delete(&self, id: AlbumId) -> RepoResult<()>;
}

/// SQLite-backed album repository.
pub struct SqliteAlbumRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAlbumRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "albums")?;
        Ok(Self { conn })
    }
}

impl AlbumRepository for SqliteAlbumRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Album>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ALBUM_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut albums = Vec::new();

        while let Some(row) = rows.next()? {
            albums.push(parse_album_row(row)?);
        }

        Ok(albums)
    }

    fn get(&self, id: AlbumId) -> RepoResult<Album> {
        let album = self
            .conn
            .query_row(
                &format!("{ALBUM_SELECT_SQL} WHERE id = ?1;"),
                [id.0],
                parse_album_row,
            )
            .optional()?;

        album.ok_or(RepoError::AlbumNotFound(id))
    }

    fn add(&self, album: &Album) -> RepoResult<()> {
        self.conn
            .execute(
                "INSERT INTO albums (id, title, singer_id) VALUES (?1, ?2, ?3);",
                params![album.id.0, album.title.as_str(), album.singer_id.0],
            )
            .map_err(|err| map_insert_error(err, "album", album.id.0))?;

        Ok(())
    }

    fn delete(&self, id: AlbumId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM albums WHERE id = ?1;", [id.0])?;

        if changed == 0 {
            return Err(RepoError::AlbumNotFound(id));
        }

        Ok(())
    }
}

fn parse_album_row(row: &Row<'_>) -> rusqlite::Result<Album> {
    Ok(Album {
        id: AlbumId(row.get("id")?),
        title: row.get("title")?,
        singer_id: SingerId(row.get("singer_id")?),
    })
}
