//! Singer repository contract and SQLite implementation.
//!
//! # Invariants
//! - `get_all` returns rows ordered by ascending singer id.
//! - `get`/`delete` on a missing id report `RepoError::SingerNotFound`.
//! - Deleting a singer leaves albums that reference it untouched.

use crate::model::singer::{Singer, SingerId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::schema::{ensure_connection_ready, map_insert_error};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SINGER_SELECT_SQL: &str = "SELECT id, name FROM singers";

/// Singer storage capability consumed by `SingerService`.
pub trait SingerRepository {
    fn get_all(&self) -> RepoResult<Vec<Singer>>;
    fn get(&self, id: SingerId) -> RepoResult<Singer>;
    fn add(&self, singer: &Singer) -> RepoResult<()>;
    fn delete(&self, id: SingerId) -> RepoResult<()>;
}

/// SQLite-backed singer repository.
pub struct SqliteSingerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSingerRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "singers")?;
        Ok(Self { conn })
    }
}

impl SingerRepository for SqliteSingerRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Singer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SINGER_SELECT_SQL} ORDER BY id ASC;"))?;
        let singers = stmt
            .query_map([], parse_singer_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(singers)
    }

    fn get(&self, id: SingerId) -> RepoResult<Singer> {
        self.conn
            .query_row(
                &format!("{SINGER_SELECT_SQL} WHERE id = ?1;"),
                [id.0],
                parse_singer_row,
            )
            .optional()?
            .ok_or(RepoError::SingerNotFound(id))
    }

    fn add(&self, singer: &Singer) -> RepoResult<()> {
        self.conn
            .execute(
                "INSERT INTO singers (id, name) VALUES (?1, ?2);",
                params![singer.id.0, singer.name.as_str()],
            )
            .map_err(|err| map_insert_error(err, "singer", singer.id.0))?;
        Ok(())
    }

    fn delete(&self, id: SingerId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM singers WHERE id = ?1;", [id.0])?;
        if changed == 0 {
            return Err(RepoError::SingerNotFound(id));
        }
        Ok(())
    }
}

fn parse_singer_row(row: &Row<'_>) -> rusqlite::Result<Singer> {
    Ok(Singer {
        id: SingerId(row.get("id")?),
        name: row.get("name")?,
    })
}
